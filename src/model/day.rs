use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayScore {
    pub total: u32,
}

/// Member id to the gross total submitted for one tournament day.
pub type DayScoreRecord = HashMap<String, DayScore, RandomState>;

/// Both score sources for a single (event, day).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EventDay {
    #[serde(default)]
    pub admin: DayScoreRecord,
    #[serde(default)]
    pub player: DayScoreRecord,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventPlayer {
    pub id: String,
    pub name: String,
}
