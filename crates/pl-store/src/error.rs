//! Error types for the store and selector registry.

use pl_ranking::{GuardError, RankingError};

/// Why a selector could not produce its view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorFailure {
    #[error(transparent)]
    Ranking(#[from] RankingError),

    #[error("{0}")]
    Custom(String),
}

impl From<GuardError> for SelectorFailure {
    fn from(err: GuardError) -> Self {
        SelectorFailure::Ranking(err.into())
    }
}

/// Registry-level errors returned from the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Selector not found: {name} (available: {})", .available.join(", "))]
    Selector { name: String, available: Vec<String> },

    #[error("Selector {name} failed: {source} (state keys: {})", .state_keys.join(", "))]
    SelectorExecution {
        name: String,
        source: SelectorFailure,
        state_keys: Vec<&'static str>,
    },

    #[error("Cannot register selector {name:?}: {reason}")]
    SelectorRegistration { name: String, reason: &'static str },
}

impl StoreError {
    /// The guard or resolver error behind a failed selector, if any.
    pub fn ranking_error(&self) -> Option<&RankingError> {
        match self {
            StoreError::SelectorExecution {
                source: SelectorFailure::Ranking(err),
                ..
            } => Some(err),
            _ => None,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
