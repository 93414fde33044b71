//! pl-core: stable foundation for peloton.
//!
//! Contains:
//! - ids (rider bibs, team ids, participant identity)
//! - series (per-stage slots and stage series)
//! - classification (the fixed classification enum)
//! - race (riders, teams, stages and the loaded sport data)
//! - error (shared error types)

pub mod classification;
pub mod error;
pub mod ids;
pub mod race;
pub mod series;

// Re-exports: nice ergonomics for downstream crates
pub use classification::Classification;
pub use error::{CoreError, CoreResult};
pub use ids::*;
pub use race::*;
pub use series::*;
