//! Crop Details Module
//!
//! Renders a crop record as a markdown article or as JSON view structs.
//!
//! ## Sections
//! 1. Cultivation - process steps, sowing/harvest window
//! 2. Soil and Water - soil type, soil health advice, water needs
//! 3. Crop Rotation - rotation partners, cross-linked to guide entries
//! 4. Past Yield Trends - recorded yields, summary stats, sparkline

pub mod sections;
pub mod generator;
pub mod generator_json;
pub mod view_models;

pub use generator::DetailsGenerator;
pub use generator_json::generate_details_data;
pub use sections::s4_yield_trend::{sparkline, TrendDirection, YieldTrend};
pub use view_models::CropDetailsView;
