//! Store configuration.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// How `select` reports a failing or unknown selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Return the error to the caller. Meant for development.
    #[default]
    Strict,
    /// Log a warning and return the fallback. Meant for production rendering.
    Lenient,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Mode::Strict),
            "lenient" => Ok(Mode::Lenient),
            other => Err(format!("unknown mode {other:?} (expected strict or lenient)")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Strict => f.write_str("strict"),
            Mode::Lenient => f.write_str("lenient"),
        }
    }
}

/// Options for constructing a [`crate::Store`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub mode: Mode,
}

impl StoreConfig {
    pub fn strict() -> Self {
        Self { mode: Mode::Strict }
    }

    pub fn lenient() -> Self {
        Self {
            mode: Mode::Lenient,
        }
    }
}
