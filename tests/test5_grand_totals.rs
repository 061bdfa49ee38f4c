use std::collections::BTreeMap;

use rusty_club::model::{DayScore, DayScoreRecord, EventDay};
use rusty_club::score::{
    GrandTotals, LayeredScoreResolver, ScoreSource, day_scores_for_display, grand_totals,
    grand_totals_from_days, resolve_day_score,
};
use rusty_club::storage::{MemoryStorage, ScoreStorage, StorageError};

fn record(entries: &[(&str, u32)]) -> DayScoreRecord {
    entries
        .iter()
        .map(|(id, total)| ((*id).to_string(), DayScore { total: *total }))
        .collect()
}

fn day(admin: &[(&str, u32)], player: &[(&str, u32)]) -> EventDay {
    EventDay {
        admin: record(admin),
        player: record(player),
    }
}

#[test]
fn test_admin_score_wins() {
    let days = [day(&[("m-1", 72)], &[("m-1", 75)])];
    let totals = grand_totals_from_days(&days, "m-1", 0.0);
    assert_eq!(totals.gross_total, 72);
    assert_eq!(
        resolve_day_score(&days[0], "m-1"),
        Some((ScoreSource::Admin, DayScore { total: 72 }))
    );
}

#[test]
fn test_player_score_used_without_admin() {
    let days = [day(&[("m-2", 70)], &[("m-1", 75)])];
    assert_eq!(grand_totals_from_days(&days, "m-1", 0.0).gross_total, 75);
    assert_eq!(
        resolve_day_score(&days[0], "m-1").map(|(source, _)| source),
        Some(ScoreSource::Player)
    );
}

#[test]
fn test_missing_day_counts_zero() {
    let days = [day(&[("m-1", 72)], &[]), day(&[], &[])];
    let totals = grand_totals_from_days(&days, "m-1", 2.0);
    assert_eq!(
        totals,
        GrandTotals {
            gross_total: 72,
            net_total: 68.0,
        }
    );
    assert_eq!(resolve_day_score(&days[1], "m-1"), None);
}

#[test]
fn test_gross_total_saturates() {
    let days = [day(&[("m-1", u32::MAX)], &[]), day(&[], &[("m-1", 70)])];
    let totals = grand_totals_from_days(&days, "m-1", 0.0);
    assert_eq!(totals.gross_total, u32::MAX);
}

#[test]
fn test_net_deducts_handicap_per_day() {
    let days = [day(&[("m-1", 72)], &[]), day(&[], &[("m-1", 80)])];
    let totals = grand_totals_from_days(&days, "m-1", 10.3);
    assert_eq!(totals.gross_total, 152);
    assert!((totals.net_total - 131.4).abs() < 1e-9);
}

#[test]
fn test_display_record_keeps_admin_scores() {
    let merged = day_scores_for_display(&day(
        &[("m-1", 72), ("m-3", 90)],
        &[("m-1", 75), ("m-2", 81)],
    ));
    assert_eq!(merged.len(), 3);
    assert_eq!(merged["m-1"].total, 72);
    assert_eq!(merged["m-2"].total, 81);
    assert_eq!(merged["m-3"].total, 90);
}

#[test]
fn test_layered_resolver_first_layer_wins() {
    let top: BTreeMap<u32, &str> = [(1, "top")].into_iter().collect();
    let middle: BTreeMap<u32, &str> = [(1, "middle"), (2, "middle")].into_iter().collect();
    let bottom: BTreeMap<u32, &str> = [(3, "bottom")].into_iter().collect();
    let resolver: LayeredScoreResolver<'_, u32, &str> = LayeredScoreResolver::new()
        .layer(&top)
        .layer(&middle)
        .layer(&bottom);

    assert_eq!(resolver.resolve(&1), Some(&"top"));
    assert_eq!(resolver.resolve(&2), Some(&"middle"));
    assert_eq!(resolver.resolve_with_layer(&3), Some((2, &"bottom")));
    assert_eq!(resolver.resolve(&4), None);
}

#[tokio::test]
async fn test_grand_totals_through_storage() -> Result<(), Box<dyn std::error::Error>> {
    let storage = MemoryStorage::new();
    storage.save_player_score(1, 1, "m-1", 75).await;
    storage.save_admin_score(1, 1, "m-1", 72).await;
    storage.save_player_score(1, 2, "m-1", 78).await;

    let totals = grand_totals(&storage, 1, "m-1", 2, 5.0).await?;
    assert_eq!(totals.gross_total, 150);
    assert_eq!(totals.net_total, 140.0);

    let again = grand_totals(&storage, 1, "m-1", 2, 5.0).await?;
    assert_eq!(totals, again);
    Ok(())
}

#[tokio::test]
async fn test_last_write_wins_per_player_day() -> Result<(), Box<dyn std::error::Error>> {
    let storage = MemoryStorage::new();
    storage.save_player_score(1, 1, "m-1", 80).await;
    storage.save_player_score(1, 1, "m-1", 78).await;
    let scores = storage.read_player_scores_for_day(1, 1).await?;
    assert_eq!(scores["m-1"].total, 78);
    assert!(storage.read_admin_scores_for_day(1, 1).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_fixture_event_totals() -> Result<(), Box<dyn std::error::Error>> {
    let json: serde_json::Value = serde_json::from_str(include_str!("fixtures/event.json"))?;
    let storage = MemoryStorage::from_json(&json)?;

    let handicap = storage.read_handicap("m-100").await?;
    let totals = grand_totals(&storage, 7, "m-100", 2, handicap).await?;
    assert_eq!(totals.gross_total, 72 + 80);
    assert_eq!(totals.net_total, 131.0);

    let totals = grand_totals(&storage, 7, "m-300", 2, 8.0).await?;
    assert_eq!(totals.gross_total, 75 + 77);

    assert_eq!(
        storage.read_handicap("nobody").await,
        Err(StorageError::MissingHandicap("nobody".to_string()))
    );
    Ok(())
}
