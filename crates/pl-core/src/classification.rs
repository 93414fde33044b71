//! The fixed set of classifications a race publishes.

use core::fmt;
use core::str::FromStr;

use crate::error::{CoreError, CoreResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Classification {
    /// Single stage result (not cumulative).
    Stage,
    General,
    Points,
    Mountain,
    Youth,
    /// Cumulative team ranking; the only classification keyed by team.
    Team,
}

impl Classification {
    pub const ALL: [Classification; 6] = [
        Classification::Stage,
        Classification::General,
        Classification::Points,
        Classification::Mountain,
        Classification::Youth,
        Classification::Team,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Stage => "stage",
            Classification::General => "general",
            Classification::Points => "points",
            Classification::Mountain => "mountain",
            Classification::Youth => "youth",
            Classification::Team => "team",
        }
    }

    /// True when the ranked participants are teams rather than riders.
    pub fn ranks_teams(self) -> bool {
        matches!(self, Classification::Team)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Classification::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownClassification {
                value: s.to_string(),
            })
    }
}
