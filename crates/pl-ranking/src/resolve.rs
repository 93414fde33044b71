//! Classification -> series map resolution.

use std::collections::BTreeMap;

use pl_core::{Classification, SeriesMap, SportData};

use crate::error::{RankingError, RankingResult};

/// Pick the series map backing `classification`.
///
/// Stage results live in their own container; every other classification is
/// looked up by name and must be present.
pub fn resolve_source<'a>(
    classification: Classification,
    stage_results: &'a SeriesMap,
    classifications: &'a BTreeMap<Classification, SeriesMap>,
) -> RankingResult<&'a SeriesMap> {
    if classification == Classification::Stage {
        return Ok(stage_results);
    }
    classifications
        .get(&classification)
        .ok_or(RankingError::SelectionClassificationNotDefined { classification })
}

pub fn resolve_in(data: &SportData, classification: Classification) -> RankingResult<&SeriesMap> {
    resolve_source(classification, &data.results, &data.classifications)
}
