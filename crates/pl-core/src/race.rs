//! Participants, stages and the loaded sport data.

use std::collections::BTreeMap;

use crate::classification::Classification;
use crate::ids::{Bib, ParticipantId, TeamId};
use crate::series::SeriesMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rider {
    pub bib: Bib,
    pub name: String,
    pub team_id: Option<TeamId>,
    /// Nationality code, e.g. "FRA".
    pub flag: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Upstream team category (e.g. "WT", "PRT").
    pub classification: Option<String>,
    /// Roster as bibs into `SportData::riders`.
    pub riders: Vec<Bib>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceStage {
    /// 0 = prologue.
    pub number: u32,
    pub name: String,
    pub kind: Option<String>,
}

/// Everything this subsystem reads. Built once when race data loads and never
/// mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SportData {
    pub riders: BTreeMap<Bib, Rider>,
    pub teams: BTreeMap<TeamId, Team>,
    /// Stage results keyed by bib.
    pub results: SeriesMap,
    /// Cumulative classifications. Rider classifications are keyed by bib,
    /// the team classification by team id.
    pub classifications: BTreeMap<Classification, SeriesMap>,
    pub stages: Vec<RaceStage>,
}

impl SportData {
    pub fn team_of(&self, rider: &Rider) -> Option<&Team> {
        rider.team_id.and_then(|id| self.teams.get(&id))
    }

    /// Highest stage number known, from stage metadata or, failing that, the
    /// longest stored series.
    pub fn last_stage(&self) -> Option<u32> {
        if let Some(max) = self.stages.iter().map(|s| s.number).max() {
            return Some(max);
        }
        self.results
            .values()
            .chain(self.classifications.values().flat_map(|m| m.values()))
            .map(|s| s.len())
            .max()
            .filter(|&len| len > 0)
            .map(|len| len as u32 - 1)
    }
}

/// Anything that can be ranked within a classification.
pub trait Competitor {
    fn participant_id(&self) -> ParticipantId;

    /// Display label for compact ranking views.
    fn label(&self) -> &str;

    /// Final tie-break among abandoned participants with equal last stage and
    /// rank. `None` keeps participant order.
    fn abandon_tiebreak(&self) -> Option<u32>;

    /// Key into the resolved series map.
    fn series_key(&self) -> u32 {
        self.participant_id().key()
    }
}

impl Competitor for Rider {
    fn participant_id(&self) -> ParticipantId {
        ParticipantId::Rider(self.bib)
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn abandon_tiebreak(&self) -> Option<u32> {
        Some(self.bib.0)
    }
}

impl Competitor for Team {
    fn participant_id(&self) -> ParticipantId {
        ParticipantId::Team(self.id)
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn abandon_tiebreak(&self) -> Option<u32> {
        None
    }
}
