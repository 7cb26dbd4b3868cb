//! Error types for the wire document text boundary

use thiserror::Error;

/// Errors raised while reading or writing wire documents as text.
///
/// The model conversions themselves never fail; only parsing and printing do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// JSON parsing or printing error
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing or printing error
    #[error("YAML error: {0}")]
    Yaml(String),

    /// The document root is not an object
    #[error("Invalid wire document: expected object at root, found {0}")]
    InvalidStructure(String),
}

impl From<serde_json::Error> for ConversionError {
    fn from(e: serde_json::Error) -> Self {
        ConversionError::Json(e.to_string())
    }
}

impl From<serde_yaml::Error> for ConversionError {
    fn from(e: serde_yaml::Error) -> Self {
        ConversionError::Yaml(e.to_string())
    }
}
