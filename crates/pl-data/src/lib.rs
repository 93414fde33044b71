//! pl-data: race document format and decoding into sport data.

pub mod decode;
pub mod schema;
pub mod validate;

pub use decode::decode_document;
pub use schema::*;
pub use validate::{ValidationError, validate_document};

use pl_core::SportData;

pub type DataResult<T> = Result<T, DataError>;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid key in {context}: {source}")]
    InvalidKey {
        context: &'static str,
        source: pl_core::CoreError,
    },

    #[error("Unknown classification: {name}")]
    UnknownClassification { name: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse, validate and decode a race document.
pub fn decode_race(json: &str) -> DataResult<SportData> {
    let document: RaceDocument = serde_json::from_str(json)?;
    validate_document(&document)?;
    decode_document(&document)
}
