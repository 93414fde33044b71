//! Per-stage slots and stage series.
//!
//! A stage series is indexed by stage number (0 = prologue). Each slot says
//! whether the participant has no row for that stage, a row carrying a
//! non-finish status, or a numeric rank. Reading past the stored length is
//! the same as reading `NoEntry`.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};

/// Status code carried by a row that has no numeric rank.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NonFinishStatus {
    /// Did not finish.
    Dnf,
    /// Did not start.
    Dns,
    /// Outside time limit.
    Otl,
    /// Disqualified.
    Dsq,
    Other(String),
}

impl FromStr for NonFinishStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let code = s.trim();
        if code.is_empty() {
            return Err(CoreError::InvalidStatus {
                value: s.to_string(),
            });
        }
        Ok(match code.to_ascii_uppercase().as_str() {
            "DNF" | "AB" => NonFinishStatus::Dnf,
            "DNS" | "NP" => NonFinishStatus::Dns,
            "OTL" | "HD" => NonFinishStatus::Otl,
            "DSQ" | "DQ" => NonFinishStatus::Dsq,
            _ => NonFinishStatus::Other(code.to_string()),
        })
    }
}

impl fmt::Display for NonFinishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonFinishStatus::Dnf => f.write_str("DNF"),
            NonFinishStatus::Dns => f.write_str("DNS"),
            NonFinishStatus::Otl => f.write_str("OTL"),
            NonFinishStatus::Dsq => f.write_str("DSQ"),
            NonFinishStatus::Other(code) => f.write_str(code),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StageSlot {
    #[default]
    NoEntry,
    NonFinish(NonFinishStatus),
    Result { rank: u32 },
}

static NO_ENTRY: StageSlot = StageSlot::NoEntry;

impl StageSlot {
    pub fn ranked(rank: u32) -> Self {
        StageSlot::Result { rank }
    }

    /// Numeric rank, if this slot holds one.
    pub fn rank(&self) -> Option<u32> {
        match self {
            StageSlot::Result { rank } => Some(*rank),
            StageSlot::NoEntry | StageSlot::NonFinish(_) => None,
        }
    }

    pub fn is_entry(&self) -> bool {
        !matches!(self, StageSlot::NoEntry)
    }
}

/// Ranking history of one participant within one classification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageSeries {
    slots: Vec<StageSlot>,
}

impl StageSeries {
    pub fn new(slots: Vec<StageSlot>) -> Self {
        Self { slots }
    }

    /// Convenience constructor: `Some(rank)` becomes a result, `None` no entry.
    pub fn from_ranks<I>(ranks: I) -> Self
    where
        I: IntoIterator<Item = Option<u32>>,
    {
        ranks
            .into_iter()
            .map(|r| r.map_or(StageSlot::NoEntry, StageSlot::ranked))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[StageSlot] {
        &self.slots
    }

    /// The authoritative "as of stage" view: slots `0..=stage`, clipped to
    /// what is stored.
    pub fn as_of(&self, stage: u32) -> &[StageSlot] {
        let end = (stage as usize).saturating_add(1).min(self.slots.len());
        &self.slots[..end]
    }

    pub fn slot(&self, stage: u32) -> &StageSlot {
        self.slots.get(stage as usize).unwrap_or(&NO_ENTRY)
    }

    pub fn rank_at(&self, stage: u32) -> Option<u32> {
        self.slot(stage).rank()
    }

    /// False when every slot is `NoEntry`, i.e. the participant never took
    /// part in this classification at all.
    pub fn has_entries(&self) -> bool {
        self.slots.iter().any(StageSlot::is_entry)
    }

    /// Latest stage strictly before `stage` holding a numeric rank, scanning
    /// backward. Returns `(stage, rank)`.
    pub fn last_ranked_before(&self, stage: u32) -> Option<(u32, u32)> {
        let view = self.as_of(stage);
        let upto = view.len().min(stage as usize);
        view[..upto]
            .iter()
            .enumerate()
            .rev()
            .find_map(|(k, slot)| slot.rank().map(|rank| (k as u32, rank)))
    }
}

impl FromIterator<StageSlot> for StageSeries {
    fn from_iter<T: IntoIterator<Item = StageSlot>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Series for every participant of one classification, keyed by bib or team id.
pub type SeriesMap = BTreeMap<u32, StageSeries>;
