use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown classification: {value}")]
    UnknownClassification { value: String },

    #[error("Invalid non-finish status: {value:?}")]
    InvalidStatus { value: String },

    #[error("Invalid identifier for {what}: {value:?}")]
    InvalidId { what: &'static str, value: String },
}
