//! Store and selector registry for peloton.
//!
//! This crate holds the canonical sport data and UI selection, notifies
//! subscribers on every change, and exposes the derived views renderers bind
//! to (`riders`, `rankingLabels`, `rankings`, `raceStages`). Failure handling
//! depends on the store's [`Mode`].

pub mod config;
pub mod error;
pub mod registry;
pub mod selectors;
pub mod state;
pub mod store;

// Re-export key types for convenience
pub use config::{Mode, StoreConfig};
pub use error::{SelectorFailure, StoreError, StoreResult};
pub use registry::{SelectorFn, SelectorRegistry};
pub use selectors::{RaceStageView, SelectorId, View};
pub use state::{State, StatePatch};
pub use store::{Store, SubscriptionId};
