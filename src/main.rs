use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rusty_club::args::{AppMode, Cli, load_config};
use rusty_club::grouping::labels_for_day;
use rusty_club::score::{event_leaderboard, grand_totals};
use rusty_club::storage::{MemoryStorage, ScoreStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_club=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = match load_config(Cli::parse())? {
        AppMode::Wolf { game, current_hole } => {
            info!(players = game.players().len(), "scoring wolf game");
            json!({
                "standings": game.standings(),
                "current_wolf": current_hole.map(|hole| game.current_wolf(hole)),
                "settlement": game.settle(),
            })
        }
        AppMode::Totals {
            events,
            event_id,
            player_id,
            days,
        } => {
            let storage = MemoryStorage::from_fixtures(&events);
            let handicap = storage.read_handicap(&player_id).await?;
            let totals = grand_totals(&storage, event_id, &player_id, days, handicap).await?;
            json!({ "player_id": player_id, "handicap": handicap, "totals": totals })
        }
        AppMode::Leaderboard {
            events,
            event_id,
            days,
        } => {
            let storage = MemoryStorage::from_fixtures(&events);
            serde_json::to_value(event_leaderboard(&storage, event_id, days).await?)?
        }
        AppMode::Labels {
            events,
            event_id,
            day,
            groups,
            doubled,
            label_override,
        } => {
            let storage = MemoryStorage::from_fixtures(&events);
            let labels =
                labels_for_day(&storage, event_id, day, groups, label_override, doubled).await?;
            serde_json::to_value(labels)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
