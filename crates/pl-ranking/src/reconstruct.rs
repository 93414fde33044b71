//! "As of stage S" ranking reconstruction.
//!
//! Every participant with any entry in the resolved series falls into one of
//! three buckets at stage `S`:
//! - active: a numeric rank at `S`, kept in participant order with that rank
//! - abandoned: no rank at `S` but a rank at some earlier stage `K`
//! - never raced: no rank anywhere in `0..=S`, dropped
//!
//! Abandoned participants are ordered by `K` descending, then their rank at
//! `K`, then (riders only) bib, and renumbered after the last active entry.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use pl_core::{Classification, Competitor, ParticipantId, SeriesMap, SportData};
use tracing::debug;

use crate::error::RankingResult;
use crate::resolve::resolve_in;

/// One participant's place in the reconstructed ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Standing {
    pub id: ParticipantId,
    pub ranking: u32,
    /// Stage the ranking was taken from: `S` when active, `K` when abandoned.
    pub last_stage: u32,
    pub has_abandoned: bool,
}

#[derive(Debug)]
struct AbandonedEntry {
    id: ParticipantId,
    rank_at_last: u32,
    last_stage: u32,
    tiebreak: Option<u32>,
}

fn abandoned_order(a: &AbandonedEntry, b: &AbandonedEntry) -> Ordering {
    b.last_stage
        .cmp(&a.last_stage)
        .then(a.rank_at_last.cmp(&b.rank_at_last))
        .then_with(|| match (a.tiebreak, b.tiebreak) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => Ordering::Equal,
        })
}

/// Reconstruct the ranking of `participants` as of `stage`.
///
/// Participants are visited in iteration order; a participant appearing twice
/// is only ranked once.
pub fn reconstruct<'a, P, I>(participants: I, stage: u32, source: &SeriesMap) -> Vec<Standing>
where
    P: Competitor + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut seen = BTreeSet::new();
    let mut active = Vec::new();
    let mut abandoned = Vec::new();
    let mut never_raced = 0usize;

    for participant in participants {
        let id = participant.participant_id();
        if !seen.insert(id) {
            continue;
        }

        let Some(series) = source.get(&participant.series_key()) else {
            continue;
        };
        if !series.has_entries() {
            continue;
        }

        if let Some(rank) = series.rank_at(stage) {
            active.push(Standing {
                id,
                ranking: rank,
                last_stage: stage,
                has_abandoned: false,
            });
        } else if let Some((last_stage, rank_at_last)) = series.last_ranked_before(stage) {
            abandoned.push(AbandonedEntry {
                id,
                rank_at_last,
                last_stage,
                tiebreak: participant.abandon_tiebreak(),
            });
        } else {
            never_raced += 1;
        }
    }

    abandoned.sort_by(abandoned_order);

    debug!(
        stage,
        active = active.len(),
        abandoned = abandoned.len(),
        never_raced,
        "reconstructed standings"
    );

    let first_abandoned = active.len() as u32 + 1;
    active.extend(
        abandoned
            .into_iter()
            .enumerate()
            .map(|(i, entry)| Standing {
                id: entry.id,
                ranking: first_abandoned + i as u32,
                last_stage: entry.last_stage,
                has_abandoned: true,
            }),
    );
    active
}

/// Resolve `classification` in `data` and reconstruct over riders or teams,
/// whichever that classification ranks.
pub fn standings_for(
    data: &SportData,
    stage: u32,
    classification: Classification,
) -> RankingResult<Vec<Standing>> {
    let source = resolve_in(data, classification)?;
    let standings = if classification.ranks_teams() {
        reconstruct(data.teams.values(), stage, source)
    } else {
        reconstruct(data.riders.values(), stage, source)
    };
    Ok(standings)
}
