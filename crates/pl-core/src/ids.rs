use core::fmt;
use core::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Race number worn by a rider; unique within one race.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Bib(pub u32);

/// Team identifier as delivered by the race data source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TeamId(pub u32);

/// Identity of anything that can be ranked.
///
/// Stable across recomputation: the same rider or team always yields the same
/// value, so consumers can key visual elements on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "id", rename_all = "lowercase"))]
pub enum ParticipantId {
    Rider(Bib),
    Team(TeamId),
}

impl ParticipantId {
    /// Raw numeric key used to look up the participant's series.
    pub fn key(self) -> u32 {
        match self {
            ParticipantId::Rider(bib) => bib.0,
            ParticipantId::Team(id) => id.0,
        }
    }
}

impl fmt::Display for Bib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantId::Rider(bib) => write!(f, "rider-{}", bib),
            ParticipantId::Team(id) => write!(f, "team-{}", id),
        }
    }
}

fn parse_key(what: &'static str, s: &str) -> CoreResult<u32> {
    s.trim().parse::<u32>().map_err(|_| CoreError::InvalidId {
        what,
        value: s.to_string(),
    })
}

impl FromStr for Bib {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        parse_key("bib", s).map(Bib)
    }
}

impl FromStr for TeamId {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        parse_key("team id", s).map(TeamId)
    }
}
