//! Race document -> sport data conversion.

use std::collections::BTreeMap;
use std::str::FromStr;

use pl_core::{
    Bib, Classification, CoreError, NonFinishStatus, RaceStage, Rider, SeriesMap, SportData,
    StageSeries, StageSlot, Team, TeamId,
};
use tracing::warn;

use crate::schema::{RaceDocument, RankDef, SlotDef};
use crate::{DataError, DataResult};

fn parse_key<T>(context: &'static str, key: &str) -> DataResult<T>
where
    T: FromStr<Err = CoreError>,
{
    key.parse::<T>()
        .map_err(|source| DataError::InvalidKey { context, source })
}

fn rank_from_number(value: f64) -> Option<u32> {
    let in_range = value.is_finite() && value >= 1.0 && value <= f64::from(u32::MAX);
    (in_range && value.fract() == 0.0).then_some(value as u32)
}

/// Where a slot sits, for diagnostics only.
struct SlotAt<'a> {
    key: &'a str,
    stage: usize,
}

fn unusable(at: &SlotAt<'_>, what: &dyn std::fmt::Debug) -> StageSlot {
    warn!(participant = at.key, stage = at.stage, value = ?what, "unusable rank; treating as no entry");
    StageSlot::NoEntry
}

fn decode_number(value: f64, at: &SlotAt<'_>) -> StageSlot {
    match rank_from_number(value) {
        Some(rank) => StageSlot::ranked(rank),
        None => unusable(at, &value),
    }
}

fn decode_text(text: &str, at: &SlotAt<'_>) -> StageSlot {
    let text = text.trim();
    if text.is_empty() {
        return StageSlot::NoEntry;
    }
    if let Ok(rank) = text.parse::<u32>() {
        return if rank >= 1 {
            StageSlot::ranked(rank)
        } else {
            unusable(at, &text)
        };
    }
    match text.parse::<NonFinishStatus>() {
        Ok(status) => StageSlot::NonFinish(status),
        Err(_) => StageSlot::NoEntry,
    }
}

fn decode_slot(slot: Option<&SlotDef>, at: &SlotAt<'_>) -> StageSlot {
    match slot {
        None => StageSlot::NoEntry,
        Some(SlotDef::Number(n)) => decode_number(*n, at),
        Some(SlotDef::Text(text)) => decode_text(text, at),
        Some(SlotDef::Entry { rank, status }) => {
            let from_rank = match rank {
                Some(RankDef::Number(n)) => decode_number(*n, at),
                Some(RankDef::Text(text)) => decode_text(text, at),
                None => StageSlot::NoEntry,
            };
            match (from_rank, status) {
                (StageSlot::NoEntry, Some(status)) => decode_text(status, at),
                (slot, _) => slot,
            }
        }
    }
}

fn decode_series(key: &str, slots: &[Option<SlotDef>]) -> StageSeries {
    slots
        .iter()
        .enumerate()
        .map(|(stage, slot)| decode_slot(slot.as_ref(), &SlotAt { key, stage }))
        .collect()
}

fn decode_series_map(
    context: &'static str,
    raw: &BTreeMap<String, Vec<Option<SlotDef>>>,
) -> DataResult<SeriesMap> {
    raw.iter()
        .map(|(key, slots)| {
            let id: Bib = parse_key(context, key)?;
            Ok((id.0, decode_series(key, slots)))
        })
        .collect()
}

/// Convert a parsed document. Null participants are dropped; a rider without
/// a team field inherits the team whose roster lists them.
pub fn decode_document(doc: &RaceDocument) -> DataResult<SportData> {
    let mut data = SportData::default();

    for (key, def) in &doc.riders {
        let Some(def) = def else { continue };
        let bib: Bib = parse_key("riders", key)?;
        data.riders.insert(
            bib,
            Rider {
                bib,
                name: def.name.clone(),
                team_id: def.team.map(TeamId),
                flag: def.flag.clone(),
            },
        );
    }

    for (key, def) in &doc.teams {
        let Some(def) = def else { continue };
        let id: TeamId = parse_key("teams", key)?;
        let riders: Vec<Bib> = def.riders.iter().copied().map(Bib).collect();
        for bib in &riders {
            if let Some(rider) = data.riders.get_mut(bib)
                && rider.team_id.is_none()
            {
                rider.team_id = Some(id);
            }
        }
        data.teams.insert(
            id,
            Team {
                id,
                name: def.name.clone(),
                classification: def.classification.clone(),
                riders,
            },
        );
    }

    data.results = decode_series_map("results", &doc.results)?;

    for (name, raw) in &doc.classifications {
        let classification = name
            .parse::<Classification>()
            .map_err(|_| DataError::UnknownClassification { name: name.clone() })?;
        if classification == Classification::Stage {
            warn!("ignoring \"stage\" entry in classifications; stage results come from results");
            continue;
        }
        let map = if classification.ranks_teams() {
            raw.iter()
                .map(|(key, slots)| {
                    let id: TeamId = parse_key("team classification", key)?;
                    Ok((id.0, decode_series(key, slots)))
                })
                .collect::<DataResult<SeriesMap>>()?
        } else {
            decode_series_map("classifications", raw)?
        };
        data.classifications.insert(classification, map);
    }

    data.stages = doc
        .stages
        .iter()
        .map(|s| RaceStage {
            number: s.number,
            name: s.name.clone(),
            kind: s.kind.clone(),
        })
        .collect();
    data.stages.sort_by_key(|s| s.number);

    Ok(data)
}
