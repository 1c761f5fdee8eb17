//! Crop Guide
//!
//! Immutable crop reference store with markdown/JSON crop details.
//!
//! - `store/`: `CropRecord`, `CropStore` and the `lookup` accessor
//! - `catalog/`: the built-in crop table
//! - `details/`: crop details articles (cultivation, soil and water, rotation, yield trend)
//! - `api_server/`: read-only HTTP API (feature `api`)

pub mod error;
pub mod catalog;
pub mod store;
pub mod details;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::StoreError;
pub use store::{CropEntry, CropRecord, CropStore};
pub use details::{generate_details_data, CropDetailsView, DetailsGenerator, YieldTrend};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
