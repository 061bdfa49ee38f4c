use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde::{Deserialize, Serialize};

use crate::model::{DayScore, DayScoreRecord, EventDay};

/// Anything a score can be looked up in.
pub trait ScoreLayer<K, V> {
    fn lookup(&self, key: &K) -> Option<&V>;
}

impl<K: Eq + Hash, V, S: BuildHasher> ScoreLayer<K, V> for HashMap<K, V, S> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K: Ord, V> ScoreLayer<K, V> for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

/// Ordered score sources, highest priority first. The first layer holding
/// a value for a key wins.
pub struct LayeredScoreResolver<'a, K, V> {
    layers: Vec<&'a dyn ScoreLayer<K, V>>,
}

impl<'a, K, V> LayeredScoreResolver<'a, K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    #[must_use]
    pub fn layer(mut self, layer: &'a dyn ScoreLayer<K, V>) -> Self {
        self.layers.push(layer);
        self
    }

    #[must_use]
    pub fn resolve(&self, key: &K) -> Option<&'a V> {
        self.resolve_with_layer(key).map(|(_, value)| value)
    }

    /// Like `resolve`, also reporting which layer (0 = highest) answered.
    #[must_use]
    pub fn resolve_with_layer(&self, key: &K) -> Option<(usize, &'a V)> {
        self.layers
            .iter()
            .enumerate()
            .find_map(|(i, layer)| layer.lookup(key).map(|v| (i, v)))
    }
}

impl<K, V> Default for LayeredScoreResolver<'_, K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Admin,
    Player,
}

/// Admin-entered scores over player-entered ones.
#[must_use]
pub fn day_resolver(day: &EventDay) -> LayeredScoreResolver<'_, String, DayScore> {
    LayeredScoreResolver::new()
        .layer(&day.admin)
        .layer(&day.player)
}

/// The score that counts for a player on a day and where it came from.
#[must_use]
pub fn resolve_day_score(day: &EventDay, player_id: &str) -> Option<(ScoreSource, DayScore)> {
    let key = player_id.to_string();
    day_resolver(day)
        .resolve_with_layer(&key)
        .map(|(layer, score)| {
            let source = if layer == 0 {
                ScoreSource::Admin
            } else {
                ScoreSource::Player
            };
            (source, *score)
        })
}

/// One record per day for display, admin scores kept wherever both exist.
#[must_use]
pub fn day_scores_for_display(day: &EventDay) -> DayScoreRecord {
    let resolver = day_resolver(day);
    day.admin
        .keys()
        .chain(day.player.keys())
        .filter_map(|id| resolver.resolve(id).map(|score| (id.clone(), *score)))
        .collect()
}
