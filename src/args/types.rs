use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::args::validation::{
    check_readable_file_and_json, validate_event_json, validate_game_json,
};
use crate::grouping::LabelOverride;
use crate::model::{HoleNumber, WolfGame};
use crate::storage::EventFixture;

#[derive(Parser, Debug)]
#[command(author, version, about = "Wolf points, payouts, event totals and tee sheets", long_about = None)]
pub struct Cli {
    /// Optional TOML file with defaults; command line values win.
    #[arg(long, global = true, value_name = "CONFIG_TOML")]
    pub config_toml: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Points, wolf rotation and payouts for a wolf game.
    Wolf {
        #[arg(long, value_name = "GAME_JSON")]
        game_json: Option<PathBuf>,
        /// Also report who is the wolf on this hole.
        #[arg(long)]
        current_hole: Option<u32>,
    },
    /// Gross and net grand totals for one player.
    Totals {
        #[arg(long, value_name = "EVENT_JSON")]
        event_json: Option<PathBuf>,
        #[arg(long)]
        event_id: Option<i64>,
        #[arg(long)]
        player_id: String,
        #[arg(long)]
        days: Option<u32>,
    },
    /// Multi-day net leaderboard for an event.
    Leaderboard {
        #[arg(long, value_name = "EVENT_JSON")]
        event_json: Option<PathBuf>,
        #[arg(long)]
        event_id: Option<i64>,
        #[arg(long)]
        days: Option<u32>,
    },
    /// Group labels (tee times or starting holes) for a day.
    Labels {
        #[arg(long, value_name = "EVENT_JSON")]
        event_json: Option<PathBuf>,
        #[arg(long)]
        event_id: Option<i64>,
        #[arg(long, default_value_t = 1)]
        day: u32,
        #[arg(long)]
        groups: Option<usize>,
        #[arg(long)]
        doubled: bool,
        #[arg(long, value_enum)]
        label_override: Option<LabelOverride>,
    },
}

#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub game_json: Option<PathBuf>,
    pub event_json: Option<PathBuf>,
    pub event_id: Option<i64>,
    pub days: Option<u32>,
    pub groups: Option<usize>,
    pub doubled: Option<bool>,
    pub label_override: Option<LabelOverride>,
}

#[derive(Debug)]
pub enum AppMode {
    Wolf {
        game: Box<WolfGame>,
        current_hole: Option<HoleNumber>,
    },
    Totals {
        events: Vec<EventFixture>,
        event_id: i64,
        player_id: String,
        days: u32,
    },
    Leaderboard {
        events: Vec<EventFixture>,
        event_id: i64,
        days: u32,
    },
    Labels {
        events: Vec<EventFixture>,
        event_id: i64,
        day: u32,
        groups: usize,
        doubled: bool,
        label_override: LabelOverride,
    },
}

const DEFAULT_DAYS: u32 = 1;
const DEFAULT_GROUPS: usize = 18;

/// Load config from CLI and optional TOML file.
///
/// # Errors
/// Returns an error if required values are missing, the config file is
/// unreadable, or an input file is not in the expected format.
pub fn load_config(cli: Cli) -> Result<AppMode> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))?
        }
        None => FileConfig::default(),
    };

    match cli.command {
        Command::Wolf {
            game_json,
            current_hole,
        } => {
            let path = game_json
                .or(file_config.game_json)
                .ok_or_else(|| anyhow!("missing --game-json"))?;
            let json = read_json(&path)?;
            validate_game_json(&json).map_err(|e| anyhow!(e))?;
            let game: WolfGame = serde_json::from_value(json)
                .with_context(|| format!("parse wolf game {}", path.display()))?;
            let current_hole = current_hole.map(HoleNumber::new).transpose()?;
            Ok(AppMode::Wolf {
                game: Box::new(game),
                current_hole,
            })
        }
        Command::Totals {
            event_json,
            event_id,
            player_id,
            days,
        } => Ok(AppMode::Totals {
            events: read_events(event_json.or(file_config.event_json))?,
            event_id: event_id
                .or(file_config.event_id)
                .ok_or_else(|| anyhow!("missing --event-id"))?,
            player_id,
            days: days.or(file_config.days).unwrap_or(DEFAULT_DAYS),
        }),
        Command::Leaderboard {
            event_json,
            event_id,
            days,
        } => Ok(AppMode::Leaderboard {
            events: read_events(event_json.or(file_config.event_json))?,
            event_id: event_id
                .or(file_config.event_id)
                .ok_or_else(|| anyhow!("missing --event-id"))?,
            days: days.or(file_config.days).unwrap_or(DEFAULT_DAYS),
        }),
        Command::Labels {
            event_json,
            event_id,
            day,
            groups,
            doubled,
            label_override,
        } => Ok(AppMode::Labels {
            events: read_events(event_json.or(file_config.event_json))?,
            event_id: event_id
                .or(file_config.event_id)
                .ok_or_else(|| anyhow!("missing --event-id"))?,
            day,
            groups: groups.or(file_config.groups).unwrap_or(DEFAULT_GROUPS),
            doubled: doubled || file_config.doubled.unwrap_or(false),
            label_override: label_override
                .or(file_config.label_override)
                .unwrap_or_default(),
        }),
    }
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let file = path
        .to_str()
        .ok_or_else(|| anyhow!("path {} is not valid utf-8", path.display()))?;
    check_readable_file_and_json(file).map_err(|e| anyhow!(e))
}

fn read_events(path: Option<PathBuf>) -> Result<Vec<EventFixture>> {
    let path = path.ok_or_else(|| anyhow!("missing --event-json"))?;
    let json = read_json(&path)?;
    validate_event_json(&json).map_err(|e| anyhow!(e))?;
    let events = if json.is_array() {
        serde_json::from_value(json)
    } else {
        serde_json::from_value(json).map(|event| vec![event])
    };
    events.with_context(|| format!("parse events {}", path.display()))
}
