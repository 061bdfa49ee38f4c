use chrono::{Duration, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

use crate::error::CoreError;
use crate::model::Period;

fn clock_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*$")
            .expect("Hardcoded clock pattern should always be valid")
    })
}

/// Parses `H:MM` / `HH:MM`. With a period the hour is on a 12-hour clock,
/// without one it is read as 24-hour.
///
/// # Errors
///
/// Will return `Err` if the text is not a clock time
pub fn parse_start_time(text: &str, period: Option<Period>) -> Result<NaiveTime, CoreError> {
    let bad = || CoreError::Parse(format!("'{text}' is not a start time"));
    let caps = clock_pattern().captures(text).ok_or_else(bad)?;
    let hour: u32 = caps[1].parse().map_err(|_| bad())?;
    let minute: u32 = caps[2].parse().map_err(|_| bad())?;

    let hour = match period {
        Some(_) if !(1..=12).contains(&hour) => return Err(bad()),
        Some(Period::Am) => hour % 12,
        Some(Period::Pm) => hour % 12 + 12,
        None => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(bad)
}

/// `start` moved on by `slot` intervals, wrapping past midnight.
#[must_use]
pub fn slot_time(start: NaiveTime, slot: usize, interval_minutes: i64) -> NaiveTime {
    let slot = i64::try_from(slot).unwrap_or(i64::MAX);
    let offset = Duration::minutes(slot.saturating_mul(interval_minutes) % (24 * 60));
    start.overflowing_add_signed(offset).0
}

/// `8:00 AM`, `12:10 PM`.
#[must_use]
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}
