//! Race document schema, as delivered by the race data server.
//!
//! Participant maps are keyed by their identity as a string (`"12"`), as
//! JSON object keys must be. A `null` participant is dropped when decoding.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RaceDocument {
    #[serde(default)]
    pub riders: BTreeMap<String, Option<RiderDef>>,
    #[serde(default)]
    pub teams: BTreeMap<String, Option<TeamDef>>,
    #[serde(default)]
    pub stages: Vec<StageDef>,
    /// Stage results keyed by bib.
    #[serde(default)]
    pub results: BTreeMap<String, Vec<Option<SlotDef>>>,
    /// Classification name -> participant key -> series.
    #[serde(default)]
    pub classifications: BTreeMap<String, BTreeMap<String, Vec<Option<SlotDef>>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiderDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(default)]
    pub riders: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageDef {
    pub number: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// One stage slot. Upstream mixes bare ranks, status strings and objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SlotDef {
    Number(f64),
    Text(String),
    Entry {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rank: Option<RankDef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RankDef {
    Number(f64),
    Text(String),
}
