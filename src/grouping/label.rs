use chrono::NaiveTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::grouping::clock::{format_clock, parse_start_time, slot_time};
use crate::model::{GroupLabelConfig, HOLES_PER_ROUND, StartType};

pub const TEE_INTERVAL_MINUTES: i64 = 10;

/// Forces a labelling style regardless of how the day is set up.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LabelOverride {
    #[default]
    None,
    TeeTime,
    Shotgun,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Style {
    TeeTime,
    Shotgun,
    Plain,
}

fn style(config: &GroupLabelConfig, label_override: LabelOverride) -> Style {
    match (label_override, config.start_type) {
        (LabelOverride::TeeTime, _) | (LabelOverride::None, StartType::TeeTime) => Style::TeeTime,
        (LabelOverride::Shotgun, _) | (LabelOverride::None, StartType::Shotgun) => Style::Shotgun,
        (LabelOverride::None, StartType::Social) => Style::Plain,
    }
}

fn start_time(config: &GroupLabelConfig) -> Option<NaiveTime> {
    let text = config.start_time.as_deref()?;
    match parse_start_time(text, config.start_period) {
        Ok(time) => Some(time),
        Err(e) => {
            warn!(error = %e, "falling back to group numbers");
            None
        }
    }
}

fn leading_hole(config: &GroupLabelConfig) -> Option<u32> {
    let hole = config.leading_hole?;
    if (1..=18).contains(&hole) {
        Some(hole)
    } else {
        warn!(hole, "leading hole is not on the course, falling back to group numbers");
        None
    }
}

/// Starting hole of the `slot`th shotgun group: one hole back per group,
/// wrapping from 1 to 18.
#[must_use]
pub fn shotgun_hole(leading_hole: u32, slot: usize) -> u32 {
    let holes = HOLES_PER_ROUND as u32;
    let back = (slot % HOLES_PER_ROUND) as u32;
    (leading_hole - 1 + holes - back) % holes + 1
}

/// Title for the `group_index`th group (0-based) of a field.
///
/// In doubled mode two groups share each tee time or hole and are told
/// apart by an `A`/`B` suffix.
#[must_use]
pub fn label(
    group_index: usize,
    config: &GroupLabelConfig,
    label_override: LabelOverride,
    doubled: bool,
) -> String {
    let (slot, suffix) = if doubled {
        (group_index / 2, if group_index % 2 == 0 { "A" } else { "B" })
    } else {
        (group_index, "")
    };

    match style(config, label_override) {
        Style::TeeTime => {
            if let Some(start) = start_time(config) {
                let base = format_clock(slot_time(start, slot, TEE_INTERVAL_MINUTES));
                return if suffix.is_empty() {
                    base
                } else {
                    format!("{base} {suffix}")
                };
            }
        }
        Style::Shotgun => {
            if let Some(hole) = leading_hole(config) {
                return format!("Hole {}{suffix}", shotgun_hole(hole, slot));
            }
        }
        Style::Plain => {}
    }
    format!("Group {}{suffix}", slot + 1)
}

#[must_use]
pub fn labels_for_field(
    group_count: usize,
    config: &GroupLabelConfig,
    label_override: LabelOverride,
    doubled: bool,
) -> Vec<String> {
    (0..group_count)
        .map(|i| label(i, config, label_override, doubled))
        .collect()
}
