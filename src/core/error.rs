// Centralized error types for the catalog

use thiserror::Error;

/// Errors raised while assembling a user record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Errors raised while rendering the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to serialize catalog: {0}")]
    Serialization(#[from] serde_json::Error),
}
