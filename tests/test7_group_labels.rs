use rstest::rstest;

use rusty_club::grouping::clock::parse_start_time;
use rusty_club::grouping::{LabelOverride, label, labels_for_day, labels_for_field, shotgun_hole};
use rusty_club::model::{GroupLabelConfig, Period, StartType};
use rusty_club::storage::MemoryStorage;

fn eight_am() -> GroupLabelConfig {
    GroupLabelConfig::tee_time("08:00", Period::Am)
}

#[rstest]
#[case(0, "8:00 AM")]
#[case(1, "8:10 AM")]
#[case(6, "9:00 AM")]
#[case(24, "12:00 PM")]
fn test_tee_time_labels(#[case] index: usize, #[case] expected: &str) {
    assert_eq!(label(index, &eight_am(), LabelOverride::None, false), expected);
}

#[rstest]
#[case("11:50", Period::Am, 1, "12:00 PM")]
#[case("12:30", Period::Pm, 0, "12:30 PM")]
#[case("12:30", Period::Am, 0, "12:30 AM")]
#[case("1:05", Period::Pm, 2, "1:25 PM")]
fn test_tee_time_periods(
    #[case] start: &str,
    #[case] period: Period,
    #[case] index: usize,
    #[case] expected: &str,
) {
    let config = GroupLabelConfig::tee_time(start, period);
    assert_eq!(label(index, &config, LabelOverride::None, false), expected);
}

#[rstest]
#[case(2, 3, "Hole 17")]
#[case(1, 0, "Hole 1")]
#[case(1, 1, "Hole 18")]
#[case(10, 4, "Hole 6")]
#[case(18, 0, "Hole 18")]
fn test_shotgun_labels(#[case] leading: u32, #[case] index: usize, #[case] expected: &str) {
    let config = GroupLabelConfig::shotgun(Some(leading));
    assert_eq!(label(index, &config, LabelOverride::None, false), expected);
}

#[test]
fn test_shotgun_wraps_every_eighteen_groups() {
    assert_eq!(shotgun_hole(5, 0), shotgun_hole(5, 18));
    assert!((0..40).all(|slot| (1..=18).contains(&shotgun_hole(1, slot))));
}

#[test]
fn test_shotgun_without_leading_hole_numbers_groups() {
    let config = GroupLabelConfig::shotgun(None);
    assert_eq!(label(3, &config, LabelOverride::None, false), "Group 4");
    let off_course = GroupLabelConfig::shotgun(Some(22));
    assert_eq!(label(0, &off_course, LabelOverride::None, false), "Group 1");
}

#[test]
fn test_doubled_groups_share_slot() {
    let labels = labels_for_field(4, &eight_am(), LabelOverride::None, true);
    assert_eq!(labels, vec!["8:00 AM A", "8:00 AM B", "8:10 AM A", "8:10 AM B"]);

    let shotgun = GroupLabelConfig::shotgun(Some(5));
    let labels = labels_for_field(3, &shotgun, LabelOverride::None, true);
    assert_eq!(labels, vec!["Hole 5A", "Hole 5B", "Hole 4A"]);
}

#[test]
fn test_override_forces_style() {
    let mut config = GroupLabelConfig::shotgun(Some(1));
    config.start_time = Some("7:30".to_string());
    config.start_period = Some(Period::Am);
    assert_eq!(label(1, &config, LabelOverride::None, false), "Hole 18");
    assert_eq!(label(1, &config, LabelOverride::TeeTime, false), "7:40 AM");

    let mut tee = eight_am();
    tee.leading_hole = Some(10);
    assert_eq!(label(1, &tee, LabelOverride::Shotgun, false), "Hole 9");
    assert_eq!(label(1, &eight_am(), LabelOverride::Shotgun, false), "Group 2");
}

#[test]
fn test_social_days_number_groups() {
    let config = GroupLabelConfig {
        start_type: StartType::Social,
        start_time: Some("9:00".to_string()),
        start_period: Some(Period::Am),
        leading_hole: Some(1),
    };
    assert_eq!(label(0, &config, LabelOverride::None, false), "Group 1");
    assert_eq!(label(0, &config, LabelOverride::None, true), "Group 1A");
    assert_eq!(label(3, &config, LabelOverride::None, true), "Group 2B");
}

#[test]
fn test_unreadable_start_time_numbers_groups() {
    let config = GroupLabelConfig::tee_time("soon", Period::Am);
    assert_eq!(label(2, &config, LabelOverride::None, false), "Group 3");
    let no_time = GroupLabelConfig::default();
    assert_eq!(label(0, &no_time, LabelOverride::None, false), "Group 1");
}

#[test]
fn test_start_time_parsing() {
    assert!(parse_start_time("13:05", None).is_ok());
    assert!(parse_start_time("13:05", Some(Period::Pm)).is_err());
    assert!(parse_start_time("8:75", Some(Period::Am)).is_err());

    let config = GroupLabelConfig {
        start_type: StartType::TeeTime,
        start_time: Some("13:05".to_string()),
        start_period: None,
        leading_hole: None,
    };
    assert_eq!(label(0, &config, LabelOverride::None, false), "1:05 PM");
}

#[test]
fn test_config_from_json() -> Result<(), serde_json::Error> {
    let config: GroupLabelConfig = serde_json::from_str(
        r#"{ "start_type": "scramble", "start_time": "08:00", "start_period": "AM" }"#,
    )?;
    assert_eq!(config.start_type, StartType::Social);
    let config: GroupLabelConfig =
        serde_json::from_str(r#"{ "start_type": "shotgun", "leading_hole": 2 }"#)?;
    assert_eq!(label(3, &config, LabelOverride::None, false), "Hole 17");
    Ok(())
}

#[test]
fn test_labels_are_stable_across_calls() {
    let shotgun = GroupLabelConfig::shotgun(Some(3));
    for config in [eight_am(), shotgun] {
        let first = labels_for_field(8, &config, LabelOverride::None, true);
        let second = labels_for_field(8, &config, LabelOverride::None, true);
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn test_labels_for_day_reads_config() -> Result<(), Box<dyn std::error::Error>> {
    let json: serde_json::Value = serde_json::from_str(include_str!("fixtures/event.json"))?;
    let storage = MemoryStorage::from_json(&json)?;

    let day1 = labels_for_day(&storage, 7, 1, 2, LabelOverride::None, false).await?;
    assert_eq!(day1, vec!["8:00 AM", "8:10 AM"]);
    let day2 = labels_for_day(&storage, 7, 2, 4, LabelOverride::None, false).await?;
    assert_eq!(day2, vec!["Hole 2", "Hole 1", "Hole 18", "Hole 17"]);
    assert!(labels_for_day(&storage, 7, 3, 4, LabelOverride::None, false).await.is_err());
    Ok(())
}
