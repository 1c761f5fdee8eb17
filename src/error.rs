//! Store construction errors.
//!
//! A missing crop on lookup is not an error (see `CropStore::lookup`);
//! these only arise when a store is built from records that break the
//! crop table invariants.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("crop name must not be empty")]
    EmptyName,

    #[error("duplicate crop name: {0}")]
    DuplicateCrop(String),

    #[error("crop {crop}: field `{field}` is empty")]
    MissingField { crop: String, field: &'static str },

    #[error("crop {0}: no rotation strategies")]
    EmptyRotation(String),

    #[error("crop {0}: past yields must be a non-empty list of finite numbers")]
    InvalidYields(String),
}
