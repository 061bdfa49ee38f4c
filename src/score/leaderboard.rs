use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CoreError;
use crate::score::aggregation::{GrandTotals, grand_totals_from_days, load_event_days};
use crate::storage::ScoreStorage;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub player_id: String,
    pub name: String,
    pub handicap: f64,
    pub totals: GrandTotals,
    /// 1-based; players level on net share a position.
    pub position: usize,
}

/// 1-based positions for scores sorted low to high; equal scores share
/// the position of the first of them.
#[must_use]
pub fn positions(sorted_nets: &[f64]) -> Vec<usize> {
    let mut out = Vec::with_capacity(sorted_nets.len());
    for (i, net) in sorted_nets.iter().enumerate() {
        let position = match (i.checked_sub(1), out.last()) {
            (Some(prev), Some(&prev_position)) if sorted_nets[prev] == *net => prev_position,
            _ => i + 1,
        };
        out.push(position);
    }
    out
}

/// Sorts by net total, lowest first, and fills in positions. Entries level
/// on net keep their incoming order.
#[must_use]
pub fn rank_by_net(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| a.totals.net_total.total_cmp(&b.totals.net_total));
    let nets: Vec<f64> = entries.iter().map(|e| e.totals.net_total).collect();
    for (entry, position) in entries.iter_mut().zip(positions(&nets)) {
        entry.position = position;
    }
    entries
}

/// Multi-day leaderboard for every player registered in an event.
///
/// # Errors
/// Returns an error if the players or scores cannot be read.
pub async fn event_leaderboard(
    storage: &dyn ScoreStorage,
    event_id: i64,
    number_of_days: u32,
) -> Result<Vec<LeaderboardEntry>, CoreError> {
    let players = storage.read_event_players(event_id).await?;
    let days = load_event_days(storage, event_id, number_of_days).await?;

    let mut entries = Vec::with_capacity(players.len());
    for player in players {
        let handicap = match storage.read_handicap(&player.id).await {
            Ok(handicap) => handicap,
            Err(e) => {
                warn!(player_id = %player.id, error = %e, "no handicap, using scratch");
                0.0
            }
        };
        entries.push(LeaderboardEntry {
            totals: grand_totals_from_days(&days, &player.id, handicap),
            player_id: player.id,
            name: player.name,
            handicap,
            position: 0,
        });
    }
    Ok(rank_by_net(entries))
}
