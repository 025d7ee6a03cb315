//! Error types for catalog loading and validation.

use crate::types::StayId;
use thiserror::Error;

/// Errors that can occur while loading or validating the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be opened or read.
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog JSON could not be parsed.
    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records share an identifier.
    #[error("Duplicate accommodation id {id} in catalog")]
    DuplicateId { id: StayId },

    /// A record's coordinate is outside valid latitude/longitude ranges.
    #[error("Record {id} has invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { id: StayId, lat: f64, lng: f64 },

    /// A field carried a value outside its accepted set.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
