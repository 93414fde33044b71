//! Race document validation logic.

use crate::schema::RaceDocument;
use std::collections::{BTreeMap, BTreeSet};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },
}

/// Numeric keys of the non-null entries of a participant map. Keys that do
/// not parse are reported by the decoder, not here.
fn present_keys<T>(map: &BTreeMap<String, Option<T>>) -> BTreeSet<u32> {
    map.iter()
        .filter(|(_, v)| v.is_some())
        .filter_map(|(k, _)| k.trim().parse::<u32>().ok())
        .collect()
}

pub fn validate_document(doc: &RaceDocument) -> Result<(), ValidationError> {
    let riders = present_keys(&doc.riders);
    let teams = present_keys(&doc.teams);

    for (key, rider) in &doc.riders {
        let Some(rider) = rider else { continue };
        if let Some(team) = rider.team
            && !teams.contains(&team)
        {
            return Err(ValidationError::MissingReference {
                id: team.to_string(),
                context: format!("team of rider {key}"),
            });
        }
    }

    let mut rostered = BTreeSet::new();
    for (key, team) in &doc.teams {
        let Some(team) = team else { continue };
        for bib in &team.riders {
            if !riders.contains(bib) {
                return Err(ValidationError::MissingReference {
                    id: bib.to_string(),
                    context: format!("roster of team {key}"),
                });
            }
            if !rostered.insert(*bib) {
                return Err(ValidationError::DuplicateId {
                    id: bib.to_string(),
                    context: "team rosters".to_string(),
                });
            }
        }
    }

    let mut stage_numbers = BTreeSet::new();
    for stage in &doc.stages {
        if !stage_numbers.insert(stage.number) {
            return Err(ValidationError::DuplicateId {
                id: stage.number.to_string(),
                context: "stages".to_string(),
            });
        }
    }

    Ok(())
}
