//! Ranking-specific error types.

use pl_core::Classification;
use thiserror::Error;

pub type GuardResult<T> = Result<T, GuardError>;
pub type RankingResult<T> = Result<T, RankingError>;

/// Selection precondition failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// No selection state exists yet; a wiring bug.
    #[error("State not initialized")]
    StateNotInitialized,

    /// The key is not part of the selection schema.
    #[error("State property not defined: selected.{key}")]
    StatePropertyNotDefined { key: String },

    /// A required selection is still unset, e.g. during initial load.
    #[error("State property not set: selected.{key}")]
    StatePropertyNotSet { key: String },

    #[error("State property value not valid: selected.{key} = {value:?}")]
    StatePropertyValueNotValid { key: String, value: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    #[error(transparent)]
    Guard(#[from] GuardError),

    /// The classification is valid but the race carries no data for it.
    #[error("Selection classification not defined: {classification}")]
    SelectionClassificationNotDefined { classification: Classification },
}
