//! pl-ranking: stage-scoped ranking reconstruction.
//!
//! Provides:
//! - Precondition guard over the UI selection
//! - Classification resolver (classification -> series map)
//! - Ranking reconstructor (active / abandoned / never raced)
//! - Label projection for renderers
//!
//! # Example
//!
//! ```
//! use pl_core::{Bib, Rider, SeriesMap, StageSeries};
//! use pl_ranking::reconstruct;
//!
//! let riders = [
//!     Rider { bib: Bib(12), name: "A".into(), team_id: None, flag: None },
//!     Rider { bib: Bib(7), name: "B".into(), team_id: None, flag: None },
//! ];
//! let mut source = SeriesMap::new();
//! source.insert(12, StageSeries::from_ranks([Some(1), Some(4)]));
//! source.insert(7, StageSeries::from_ranks([Some(2), None]));
//!
//! let standings = reconstruct(&riders, 1, &source);
//! assert_eq!(standings[0].ranking, 4);
//! assert!(standings[1].has_abandoned);
//! assert_eq!(standings[1].ranking, 2);
//! ```

pub mod error;
pub mod guard;
pub mod project;
pub mod reconstruct;
pub mod resolve;

// Re-exports for ergonomics
pub use error::{GuardError, GuardResult, RankingError, RankingResult};
pub use guard::{
    CheckedSelection, Requirement, Selection, SelectionKey, check_selected,
    require_stage_and_classification,
};
pub use project::{RankingLabel, RiderRecord, StageRankings, TeamRef, ranking_labels, rider_records};
pub use reconstruct::{Standing, reconstruct, standings_for};
pub use resolve::{resolve_in, resolve_source};
