use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::model::{DayScore, DayScoreRecord, EventPlayer, GroupLabelConfig};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("no handicap for player {0}")]
    MissingHandicap(String),
    #[error("no config for event {event_id} day {day}")]
    MissingDayConfig { event_id: i64, day: u32 },
    #[error("no players for event {0}")]
    MissingPlayers(i64),
}

/// Where scores, handicaps and day settings come from. The scoring core
/// only ever reads through this; saving and sync live with the implementor.
#[async_trait]
pub trait ScoreStorage: Send + Sync {
    async fn read_admin_scores_for_day(
        &self,
        event_id: i64,
        day: u32,
    ) -> Result<DayScoreRecord, StorageError>;
    async fn read_player_scores_for_day(
        &self,
        event_id: i64,
        day: u32,
    ) -> Result<DayScoreRecord, StorageError>;
    async fn read_handicap(&self, player_id: &str) -> Result<f64, StorageError>;
    async fn read_event_day_config(
        &self,
        event_id: i64,
        day: u32,
    ) -> Result<GroupLabelConfig, StorageError>;
    async fn read_event_players(&self, event_id: i64) -> Result<Vec<EventPlayer>, StorageError>;
}

/// One event as stored in a JSON fixture.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EventFixture {
    pub event_id: i64,
    #[serde(default)]
    pub players: Vec<EventPlayer>,
    #[serde(default)]
    pub handicaps: HashMap<String, f64>,
    /// Keyed by day number, starting at 1.
    #[serde(default)]
    pub days: HashMap<u32, FixtureDay>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FixtureDay {
    #[serde(default)]
    pub config: GroupLabelConfig,
    #[serde(default)]
    pub admin_scores: HashMap<String, u32>,
    #[serde(default)]
    pub player_scores: HashMap<String, u32>,
}

#[derive(Default)]
struct MemoryState {
    players: HashMap<i64, Vec<EventPlayer>>,
    handicaps: HashMap<String, f64>,
    configs: HashMap<(i64, u32), GroupLabelConfig>,
    admin: HashMap<(i64, u32), DayScoreRecord>,
    player: HashMap<(i64, u32), DayScoreRecord>,
}

/// In-memory storage. Saves are last-write-wins per (event, day, player).
#[derive(Default)]
pub struct MemoryStorage {
    state: RwLock<MemoryState>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_fixtures(fixtures: &[EventFixture]) -> Self {
        let mut state = MemoryState::default();
        for fixture in fixtures {
            let event_id = fixture.event_id;
            state.players.insert(event_id, fixture.players.clone());
            state.handicaps.extend(fixture.handicaps.clone());
            for (&day, data) in &fixture.days {
                state.configs.insert((event_id, day), data.config.clone());
                state
                    .admin
                    .insert((event_id, day), to_record(&data.admin_scores));
                state
                    .player
                    .insert((event_id, day), to_record(&data.player_scores));
            }
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the json is not an event fixture or a list of them
    pub fn from_json(json: &serde_json::Value) -> Result<Self, CoreError> {
        let fixtures: Vec<EventFixture> = if json.is_array() {
            serde_json::from_value(json.clone())?
        } else {
            vec![serde_json::from_value(json.clone())?]
        };
        Ok(Self::from_fixtures(&fixtures))
    }

    pub async fn save_admin_score(&self, event_id: i64, day: u32, player_id: &str, total: u32) {
        let mut state = self.state.write().await;
        state
            .admin
            .entry((event_id, day))
            .or_default()
            .insert(player_id.to_string(), DayScore { total });
    }

    pub async fn save_player_score(&self, event_id: i64, day: u32, player_id: &str, total: u32) {
        let mut state = self.state.write().await;
        state
            .player
            .entry((event_id, day))
            .or_default()
            .insert(player_id.to_string(), DayScore { total });
    }

    pub async fn set_handicap(&self, player_id: &str, handicap: f64) {
        let mut state = self.state.write().await;
        state.handicaps.insert(player_id.to_string(), handicap);
    }

    pub async fn set_event_players(&self, event_id: i64, players: Vec<EventPlayer>) {
        let mut state = self.state.write().await;
        state.players.insert(event_id, players);
    }
}

fn to_record(scores: &HashMap<String, u32>) -> DayScoreRecord {
    scores
        .iter()
        .map(|(id, total)| (id.clone(), DayScore { total: *total }))
        .collect()
}

#[async_trait]
impl ScoreStorage for MemoryStorage {
    async fn read_admin_scores_for_day(
        &self,
        event_id: i64,
        day: u32,
    ) -> Result<DayScoreRecord, StorageError> {
        let state = self.state.read().await;
        Ok(state.admin.get(&(event_id, day)).cloned().unwrap_or_default())
    }

    async fn read_player_scores_for_day(
        &self,
        event_id: i64,
        day: u32,
    ) -> Result<DayScoreRecord, StorageError> {
        let state = self.state.read().await;
        Ok(state.player.get(&(event_id, day)).cloned().unwrap_or_default())
    }

    async fn read_handicap(&self, player_id: &str) -> Result<f64, StorageError> {
        let state = self.state.read().await;
        state
            .handicaps
            .get(player_id)
            .copied()
            .ok_or_else(|| StorageError::MissingHandicap(player_id.to_string()))
    }

    async fn read_event_day_config(
        &self,
        event_id: i64,
        day: u32,
    ) -> Result<GroupLabelConfig, StorageError> {
        let state = self.state.read().await;
        state
            .configs
            .get(&(event_id, day))
            .cloned()
            .ok_or(StorageError::MissingDayConfig { event_id, day })
    }

    async fn read_event_players(&self, event_id: i64) -> Result<Vec<EventPlayer>, StorageError> {
        let state = self.state.read().await;
        state
            .players
            .get(&event_id)
            .cloned()
            .ok_or(StorageError::MissingPlayers(event_id))
    }
}
