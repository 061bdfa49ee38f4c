use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

pub const HOLES_PER_ROUND: usize = 18;

/// A hole on an 18-hole course, always within `1..=18`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub struct HoleNumber(u32);

impl HoleNumber {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(18);

    /// # Errors
    ///
    /// Will return `Err` if the number is outside `1..=18`
    pub fn new(number: u32) -> Result<Self, CoreError> {
        if (1..=18).contains(&number) {
            Ok(Self(number))
        } else {
            Err(CoreError::Config(format!(
                "hole {number} is outside 1..=18"
            )))
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index + 1)
            .ok()
            .filter(|n| (1..=18).contains(n))
            .map(Self)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// 0-based position of the hole on the scorecard.
    #[must_use]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (1..=18).map(Self)
    }
}

impl TryFrom<u32> for HoleNumber {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HoleNumber> for u32 {
    fn from(value: HoleNumber) -> Self {
        value.0
    }
}

impl fmt::Display for HoleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slot of a player in a game's player list.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PlayerIndex(usize);

impl PlayerIndex {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn is_valid_for(self, player_count: usize) -> bool {
        self.0 < player_count
    }
}

impl From<usize> for PlayerIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for PlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrokeMode {
    #[serde(rename = "manual")]
    Manual,
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "all-but-par3")]
    AllButPar3,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub member_id: Option<String>,
    #[serde(default)]
    pub handicap: f64,
    #[serde(default)]
    pub stroke_mode: StrokeMode,
    #[serde(default)]
    pub strokes_received: Option<u32>,
    #[serde(default)]
    pub team: Option<String>,
    /// Gross strokes per hole, 0 while a hole has not been entered.
    #[serde(default)]
    pub scores: [u32; HOLES_PER_ROUND],
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, handicap: f64) -> Self {
        Self {
            name: name.into(),
            member_id: None,
            handicap,
            stroke_mode: StrokeMode::default(),
            strokes_received: None,
            team: None,
            scores: [0; HOLES_PER_ROUND],
        }
    }

    #[must_use]
    pub fn with_stroke_mode(mut self, stroke_mode: StrokeMode) -> Self {
        self.stroke_mode = stroke_mode;
        self
    }

    #[must_use]
    pub fn with_scores(mut self, scores: [u32; HOLES_PER_ROUND]) -> Self {
        self.scores = scores;
        self
    }

    /// Gross strokes on a hole, `None` until something was entered.
    #[must_use]
    pub fn gross(&self, hole: HoleNumber) -> Option<u32> {
        self.scores.get(hole.index()).copied().filter(|s| *s > 0)
    }

    #[must_use]
    pub fn running_total(&self) -> u32 {
        self.scores.iter().sum()
    }

    #[must_use]
    pub fn holes_played(&self) -> usize {
        self.scores.iter().filter(|s| **s > 0).count()
    }

    /// Handicap rounded half away from zero, the number of strokes the
    /// player gets on the hardest holes.
    #[must_use]
    pub fn rounded_handicap(&self) -> i64 {
        self.handicap.round() as i64
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawCourse")]
pub struct Course {
    pars: [u32; HOLES_PER_ROUND],
    stroke_index: [u32; HOLES_PER_ROUND],
}

#[derive(Deserialize)]
struct RawCourse {
    pars: [u32; HOLES_PER_ROUND],
    stroke_index: [u32; HOLES_PER_ROUND],
}

impl TryFrom<RawCourse> for Course {
    type Error = CoreError;

    fn try_from(raw: RawCourse) -> Result<Self, Self::Error> {
        Self::new(raw.pars, raw.stroke_index)
    }
}

impl Course {
    /// # Errors
    ///
    /// Will return `Err` if a par is zero or the stroke index is not a
    /// ranking of the holes from 1 to 18
    pub fn new(
        pars: [u32; HOLES_PER_ROUND],
        stroke_index: [u32; HOLES_PER_ROUND],
    ) -> Result<Self, CoreError> {
        if let Some(hole) = pars.iter().position(|p| *p == 0) {
            return Err(CoreError::Config(format!("hole {} has no par", hole + 1)));
        }
        let mut ranks = stroke_index;
        ranks.sort_unstable();
        if ranks.iter().zip(1..).any(|(rank, expected)| *rank != expected) {
            return Err(CoreError::Config(
                "stroke index must rank every hole from 1 to 18 exactly once".to_string(),
            ));
        }
        Ok(Self { pars, stroke_index })
    }

    #[must_use]
    pub fn par(&self, hole_index: usize) -> Option<u32> {
        self.pars.get(hole_index).copied()
    }

    #[must_use]
    pub fn stroke_index(&self, hole_index: usize) -> Option<u32> {
        self.stroke_index.get(hole_index).copied()
    }

    #[must_use]
    pub fn is_par3(&self, hole_index: usize) -> bool {
        self.par(hole_index) == Some(3)
    }

    /// Hole indices ordered from hardest (stroke index 1) to easiest.
    #[must_use]
    pub fn holes_by_difficulty(&self) -> Vec<usize> {
        let mut holes: Vec<usize> = (0..HOLES_PER_ROUND).collect();
        holes.sort_by_key(|&i| self.stroke_index[i]);
        holes
    }
}

impl Default for Course {
    /// Par 72, odd stroke indexes on the front nine and even on the back.
    fn default() -> Self {
        Self {
            pars: [4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 4, 3, 5, 4, 4, 3, 4, 5],
            stroke_index: [7, 11, 15, 1, 17, 3, 9, 13, 5, 8, 12, 16, 2, 18, 4, 10, 14, 6],
        }
    }
}
