use rusty_club::model::EventPlayer;
use rusty_club::score::{GrandTotals, LeaderboardEntry, event_leaderboard, positions, rank_by_net};
use rusty_club::storage::MemoryStorage;

fn entry(id: &str, gross: u32, net: f64) -> LeaderboardEntry {
    LeaderboardEntry {
        player_id: id.to_string(),
        name: id.to_uppercase(),
        handicap: 0.0,
        totals: GrandTotals {
            gross_total: gross,
            net_total: net,
        },
        position: 0,
    }
}

#[test]
fn test_tied_players_share_position() {
    assert_eq!(positions(&[70.0, 70.0, 72.0]), vec![1, 1, 3]);
    assert_eq!(positions(&[68.0, 70.0, 70.0, 70.0, 71.5]), vec![1, 2, 2, 2, 5]);
    assert!(positions(&[]).is_empty());
}

#[test]
fn test_rank_sorts_by_net() {
    let ranked = rank_by_net(vec![
        entry("c", 80, 72.0),
        entry("a", 78, 70.0),
        entry("b", 75, 70.0),
        entry("d", 90, 69.5),
    ]);
    let order: Vec<(&str, usize)> = ranked
        .iter()
        .map(|e| (e.player_id.as_str(), e.position))
        .collect();
    assert_eq!(order, vec![("d", 1), ("a", 2), ("b", 2), ("c", 4)]);
}

#[tokio::test]
async fn test_event_leaderboard_from_fixture() -> Result<(), Box<dyn std::error::Error>> {
    let json: serde_json::Value = serde_json::from_str(include_str!("fixtures/event.json"))?;
    let storage = MemoryStorage::from_json(&json)?;

    let board = event_leaderboard(&storage, 7, 2).await?;
    let rows: Vec<(&str, u32, f64, usize)> = board
        .iter()
        .map(|e| (e.player_id.as_str(), e.totals.gross_total, e.totals.net_total, e.position))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("m-100", 152, 131.0, 1),
            ("m-200", 144, 136.0, 2),
            ("m-300", 152, 136.0, 2),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_leaderboard_without_handicap_plays_scratch() -> Result<(), Box<dyn std::error::Error>>
{
    let storage = MemoryStorage::new();
    storage
        .set_event_players(
            3,
            vec![
                EventPlayer {
                    id: "x".to_string(),
                    name: "X".to_string(),
                },
                EventPlayer {
                    id: "y".to_string(),
                    name: "Y".to_string(),
                },
            ],
        )
        .await;
    storage.set_handicap("y", 10.0).await;
    storage.save_admin_score(3, 1, "x", 75).await;
    storage.save_player_score(3, 1, "y", 84).await;

    let board = event_leaderboard(&storage, 3, 1).await?;
    assert_eq!(board[0].player_id, "y");
    assert_eq!(board[0].totals.net_total, 74.0);
    assert_eq!(board[1].player_id, "x");
    assert_eq!(board[1].handicap, 0.0);
    assert_eq!(board[1].position, 2);

    assert!(event_leaderboard(&storage, 99, 1).await.is_err());
    Ok(())
}
