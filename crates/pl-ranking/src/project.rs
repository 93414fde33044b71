//! Projection of standings into renderer-facing records.
//!
//! Every record's `id` is the participant's identity, never a position, so a
//! renderer can diff successive arrays by key and animate moves.

use pl_core::{Bib, Competitor, ParticipantId, SportData, TeamId};

use crate::reconstruct::Standing;

/// Compact label for ranking panels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RankingLabel {
    pub id: ParticipantId,
    pub label: String,
    pub ranking: u32,
    pub last_stage: u32,
    pub has_abandoned: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StageRankings {
    pub result: Standing,
}

/// Per-rider record with a back-reference to the rider's team.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RiderRecord {
    pub id: ParticipantId,
    pub bib: Bib,
    pub name: String,
    pub flag: Option<String>,
    pub team: Option<TeamRef>,
    pub stage_rankings: StageRankings,
}

fn label_of(data: &SportData, id: ParticipantId) -> String {
    let known = match id {
        ParticipantId::Rider(bib) => data.riders.get(&bib).map(Competitor::label),
        ParticipantId::Team(team) => data.teams.get(&team).map(Competitor::label),
    };
    known.map_or_else(|| id.to_string(), str::to_string)
}

pub fn ranking_labels(standings: &[Standing], data: &SportData) -> Vec<RankingLabel> {
    standings
        .iter()
        .map(|s| RankingLabel {
            id: s.id,
            label: label_of(data, s.id),
            ranking: s.ranking,
            last_stage: s.last_stage,
            has_abandoned: s.has_abandoned,
        })
        .collect()
}

/// Rider records in standing order. Team standings and bibs missing from the
/// rider map are skipped.
pub fn rider_records(standings: &[Standing], data: &SportData) -> Vec<RiderRecord> {
    standings
        .iter()
        .filter_map(|s| {
            let ParticipantId::Rider(bib) = s.id else {
                return None;
            };
            let rider = data.riders.get(&bib)?;
            let team = data.team_of(rider).map(|t| TeamRef {
                id: t.id,
                name: t.name.clone(),
            });
            Some(RiderRecord {
                id: s.id,
                bib,
                name: rider.name.clone(),
                flag: rider.flag.clone(),
                team,
                stage_rankings: StageRankings { result: *s },
            })
        })
        .collect()
}
