pub mod clock;
pub mod label;

pub use label::*;

use crate::error::CoreError;
use crate::storage::ScoreStorage;

/// Labels for a day's field, using the day's configured start.
///
/// # Errors
/// Returns an error if the day config cannot be read.
pub async fn labels_for_day(
    storage: &dyn ScoreStorage,
    event_id: i64,
    day: u32,
    group_count: usize,
    label_override: LabelOverride,
    doubled: bool,
) -> Result<Vec<String>, CoreError> {
    let config = storage.read_event_day_config(event_id, day).await?;
    Ok(labels_for_field(group_count, &config, label_override, doubled))
}
