//! Built-in selectors: derived views over the store state.
//!
//! Each selector is pure: it reads `&State`, never mutates it, and recomputes
//! from scratch on every call. An unset stage or classification (the normal
//! situation during initial load) yields an empty view rather than an error.

use core::fmt;
use core::str::FromStr;

use pl_core::{Classification, SportData};
use pl_ranking::{
    GuardError, RankingLabel, Requirement, RiderRecord, SelectionKey, Standing, check_selected,
    ranking_labels, require_stage_and_classification, rider_records, standings_for,
};
use serde::Serialize;
use tracing::debug;

use crate::error::SelectorFailure;
use crate::state::State;

/// Stage metadata annotated with its position relative to the selected stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceStageView {
    pub number: u32,
    pub name: String,
    pub kind: Option<String>,
    pub completed: bool,
    pub current: bool,
}

/// Output of any selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum View {
    Riders(Vec<RiderRecord>),
    RankingLabels(Vec<RankingLabel>),
    Rankings(Vec<Standing>),
    RaceStages(Vec<RaceStageView>),
    Custom(serde_json::Value),
}

impl View {
    pub fn len(&self) -> usize {
        match self {
            View::Riders(v) => v.len(),
            View::RankingLabels(v) => v.len(),
            View::Rankings(v) => v.len(),
            View::RaceStages(v) => v.len(),
            View::Custom(serde_json::Value::Array(v)) => v.len(),
            View::Custom(serde_json::Value::Null) => 0,
            View::Custom(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_riders(&self) -> Option<&[RiderRecord]> {
        match self {
            View::Riders(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ranking_labels(&self) -> Option<&[RankingLabel]> {
        match self {
            View::RankingLabels(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_rankings(&self) -> Option<&[Standing]> {
        match self {
            View::Rankings(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_race_stages(&self) -> Option<&[RaceStageView]> {
        match self {
            View::RaceStages(v) => Some(v),
            _ => None,
        }
    }
}

/// The closed set of selectors every store carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SelectorId {
    Riders,
    RankingLabels,
    Rankings,
    RaceStages,
}

impl SelectorId {
    pub const ALL: [SelectorId; 4] = [
        SelectorId::Riders,
        SelectorId::RankingLabels,
        SelectorId::Rankings,
        SelectorId::RaceStages,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SelectorId::Riders => "riders",
            SelectorId::RankingLabels => "rankingLabels",
            SelectorId::Rankings => "rankings",
            SelectorId::RaceStages => "raceStages",
        }
    }

    pub fn run(self, state: &State) -> Result<View, SelectorFailure> {
        match self {
            SelectorId::Riders => select_riders(state),
            SelectorId::RankingLabels => select_ranking_labels(state),
            SelectorId::Rankings => select_rankings(state),
            SelectorId::RaceStages => select_race_stages(state),
        }
    }
}

impl fmt::Display for SelectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SelectorId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SelectorId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| format!("unknown selector {s:?}"))
    }
}

/// Sport data plus a validated stage and classification, or `None` while the
/// selection or data is still loading.
fn ranking_inputs(
    state: &State,
) -> Result<Option<(&SportData, u32, Classification)>, SelectorFailure> {
    let (stage, classification) = match require_stage_and_classification(state.selected.as_ref())
    {
        Ok(checked) => checked,
        Err(GuardError::StatePropertyNotSet { key }) => {
            debug!(%key, "selection pending; empty view");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    Ok(state
        .sport_data
        .as_ref()
        .map(|data| (data, stage, classification)))
}

pub fn select_rankings(state: &State) -> Result<View, SelectorFailure> {
    let Some((data, stage, classification)) = ranking_inputs(state)? else {
        return Ok(View::Rankings(Vec::new()));
    };
    Ok(View::Rankings(standings_for(data, stage, classification)?))
}

pub fn select_ranking_labels(state: &State) -> Result<View, SelectorFailure> {
    let Some((data, stage, classification)) = ranking_inputs(state)? else {
        return Ok(View::RankingLabels(Vec::new()));
    };
    let standings = standings_for(data, stage, classification)?;
    Ok(View::RankingLabels(ranking_labels(&standings, data)))
}

/// Every rider's stage result as of the selected stage, with team reference.
pub fn select_riders(state: &State) -> Result<View, SelectorFailure> {
    let checked = match check_selected(
        state.selected.as_ref(),
        &[Requirement::required(SelectionKey::Stage)],
    ) {
        Ok(checked) => checked,
        Err(GuardError::StatePropertyNotSet { .. }) => return Ok(View::Riders(Vec::new())),
        Err(err) => return Err(err.into()),
    };
    let (Some(data), Some(stage)) = (state.sport_data.as_ref(), checked.stage) else {
        return Ok(View::Riders(Vec::new()));
    };
    let standings = standings_for(data, stage, Classification::Stage)?;
    Ok(View::Riders(rider_records(&standings, data)))
}

fn default_stage_name(number: u32) -> String {
    if number == 0 {
        "Prologue".to_string()
    } else {
        format!("Stage {number}")
    }
}

/// All race stages, flagged against the selected stage when one is set.
pub fn select_race_stages(state: &State) -> Result<View, SelectorFailure> {
    let checked = check_selected(
        state.selected.as_ref(),
        &[Requirement::optional(SelectionKey::Stage)],
    )?;
    let Some(data) = state.sport_data.as_ref() else {
        return Ok(View::RaceStages(Vec::new()));
    };

    let flag = |number: u32, name: String, kind: Option<String>| RaceStageView {
        number,
        name,
        kind,
        completed: checked.stage.is_some_and(|s| number < s),
        current: checked.stage == Some(number),
    };

    let mut stages: Vec<RaceStageView> = if data.stages.is_empty() {
        // No metadata: derive stage numbers from the stored series.
        data.last_stage()
            .map(|last| {
                (0..=last)
                    .map(|n| flag(n, default_stage_name(n), None))
                    .collect()
            })
            .unwrap_or_default()
    } else {
        data.stages
            .iter()
            .map(|s| flag(s.number, s.name.clone(), s.kind.clone()))
            .collect()
    };
    stages.sort_by_key(|s| s.number);
    Ok(View::RaceStages(stages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl_core::{Bib, RaceStage, Rider, SeriesMap, StageSeries, Team, TeamId};
    use pl_ranking::{RankingError, Selection};

    fn data() -> SportData {
        let mut data = SportData::default();
        data.riders.insert(
            Bib(1),
            Rider {
                bib: Bib(1),
                name: "Remco".into(),
                team_id: Some(TeamId(5)),
                flag: Some("BEL".into()),
            },
        );
        data.teams.insert(
            TeamId(5),
            Team {
                id: TeamId(5),
                name: "Soudal".into(),
                classification: None,
                riders: vec![Bib(1)],
            },
        );
        data.results
            .insert(1, StageSeries::from_ranks([Some(3), Some(1), Some(2)]));
        let mut team = SeriesMap::new();
        team.insert(5, StageSeries::from_ranks([Some(1), Some(1), Some(1)]));
        data.classifications.insert(Classification::Team, team);
        data
    }

    fn state(selection: Selection) -> State {
        State {
            sport_data: Some(data()),
            selected: Some(selection),
        }
    }

    #[test]
    fn rankings_for_selection() {
        let view = select_rankings(&state(Selection::new(1, "stage"))).unwrap();
        let rankings = view.as_rankings().unwrap();
        assert_eq!(rankings.len(), 1);
        assert_eq!(rankings[0].ranking, 1);
    }

    #[test]
    fn labels_for_team_classification() {
        let view = select_ranking_labels(&state(Selection::new(2, "team"))).unwrap();
        assert_eq!(view.as_ranking_labels().unwrap()[0].label, "Soudal");
    }

    #[test]
    fn unset_classification_gives_empty_view() {
        let selection = Selection {
            stage: Some(1),
            ..Selection::default()
        };
        let view = select_ranking_labels(&state(selection)).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn invalid_classification_is_a_failure() {
        let err = select_rankings(&state(Selection::new(1, "sprint"))).unwrap_err();
        assert!(matches!(
            err,
            SelectorFailure::Ranking(RankingError::Guard(
                GuardError::StatePropertyValueNotValid { .. }
            ))
        ));
    }

    #[test]
    fn missing_classification_data_is_a_failure() {
        let err = select_rankings(&state(Selection::new(1, "points"))).unwrap_err();
        assert_eq!(
            err,
            SelectorFailure::Ranking(RankingError::SelectionClassificationNotDefined {
                classification: Classification::Points
            })
        );
    }

    #[test]
    fn riders_carry_stage_result_and_team() {
        let view = select_riders(&state(Selection::new(2, "general"))).unwrap();
        let riders = view.as_riders().unwrap();
        assert_eq!(riders[0].stage_rankings.result.ranking, 2);
        assert_eq!(riders[0].team.as_ref().map(|t| t.name.as_str()), Some("Soudal"));
    }

    #[test]
    fn race_stages_derived_from_series_when_no_metadata() {
        let view = select_race_stages(&state(Selection::new(1, "stage"))).unwrap();
        let stages = view.as_race_stages().unwrap();
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0].name, "Prologue");
        assert!(stages[0].completed);
        assert!(stages[1].current);
        assert!(!stages[2].completed && !stages[2].current);
    }

    #[test]
    fn race_stages_prefer_metadata() {
        let mut st = state(Selection::default());
        if let Some(data) = st.sport_data.as_mut() {
            data.stages = vec![
                RaceStage {
                    number: 1,
                    name: "Lille - Roubaix".into(),
                    kind: Some("cobbles".into()),
                },
                RaceStage {
                    number: 0,
                    name: "Lille ITT".into(),
                    kind: Some("itt".into()),
                },
            ];
        }
        let view = select_race_stages(&st).unwrap();
        let stages = view.as_race_stages().unwrap();
        assert_eq!(stages[0].name, "Lille ITT");
        assert!(stages.iter().all(|s| !s.current && !s.completed));
    }

    #[test]
    fn selector_names_round_trip() {
        for id in SelectorId::ALL {
            assert_eq!(id.name().parse::<SelectorId>().unwrap(), id);
        }
        assert!("unknownSelector".parse::<SelectorId>().is_err());
    }
}
