use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum StartType {
    #[default]
    TeeTime,
    Shotgun,
    /// Scrambles, socials and anything else without a fixed start.
    Social,
}

impl From<String> for StartType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tee-time" => Self::TeeTime,
            "shotgun" => Self::Shotgun,
            _ => Self::Social,
        }
    }
}

impl From<StartType> for String {
    fn from(value: StartType) -> Self {
        match value {
            StartType::TeeTime => "tee-time",
            StartType::Shotgun => "shotgun",
            StartType::Social => "social",
        }
        .to_string()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    #[serde(rename = "AM", alias = "am")]
    Am,
    #[serde(rename = "PM", alias = "pm")]
    Pm,
}

/// How groups start on one tournament day.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupLabelConfig {
    #[serde(default)]
    pub start_type: StartType,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub start_period: Option<Period>,
    #[serde(default)]
    pub leading_hole: Option<u32>,
}

impl GroupLabelConfig {
    #[must_use]
    pub fn tee_time(start_time: impl Into<String>, period: Period) -> Self {
        Self {
            start_type: StartType::TeeTime,
            start_time: Some(start_time.into()),
            start_period: Some(period),
            leading_hole: None,
        }
    }

    #[must_use]
    pub fn shotgun(leading_hole: Option<u32>) -> Self {
        Self {
            start_type: StartType::Shotgun,
            start_time: None,
            start_period: None,
            leading_hole,
        }
    }
}
