use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CoreError;
use crate::model::EventDay;
use crate::score::resolver::resolve_day_score;
use crate::storage::ScoreStorage;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GrandTotals {
    pub gross_total: u32,
    pub net_total: f64,
}

/// Gross and net totals across every day of an event. `days[0]` is day 1.
///
/// A day with no score for the player counts as 0.
#[must_use]
pub fn grand_totals_from_days(days: &[EventDay], player_id: &str, handicap: f64) -> GrandTotals {
    let mut gross_total: u32 = 0;
    for (i, day) in days.iter().enumerate() {
        match resolve_day_score(day, player_id) {
            Some((_, score)) => gross_total = gross_total.saturating_add(score.total),
            None => info!(player_id, day = i + 1, "no score submitted for day"),
        }
    }
    let day_count = i64::try_from(days.len()).unwrap_or(i64::MAX);
    GrandTotals {
        gross_total,
        net_total: net_total(gross_total, day_count, handicap),
    }
}

/// `gross - days * handicap`, worked in tenths of a stroke since
/// handicaps carry one decimal.
fn net_total(gross_total: u32, day_count: i64, handicap: f64) -> f64 {
    let handicap_tenths = (handicap * 10.0).round() as i64;
    let net_tenths =
        (i64::from(gross_total) * 10).saturating_sub(day_count.saturating_mul(handicap_tenths));
    net_tenths as f64 / 10.0
}

/// Reads both score sources for days `1..=number_of_days`.
///
/// # Errors
/// Returns an error if any storage read fails.
pub async fn load_event_days(
    storage: &dyn ScoreStorage,
    event_id: i64,
    number_of_days: u32,
) -> Result<Vec<EventDay>, CoreError> {
    let reads = (1..=number_of_days).map(|day| async move {
        let (admin, player) = futures::try_join!(
            storage.read_admin_scores_for_day(event_id, day),
            storage.read_player_scores_for_day(event_id, day),
        )?;
        Ok::<_, CoreError>(EventDay { admin, player })
    });
    try_join_all(reads).await
}

/// Grand totals for one player, read through storage.
///
/// # Errors
/// Returns an error if any storage read fails.
pub async fn grand_totals(
    storage: &dyn ScoreStorage,
    event_id: i64,
    player_id: &str,
    number_of_days: u32,
    handicap: f64,
) -> Result<GrandTotals, CoreError> {
    let days = load_event_days(storage, event_id, number_of_days).await?;
    Ok(grand_totals_from_days(&days, player_id, handicap))
}
