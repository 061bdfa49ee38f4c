use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::model::types::{Course, HoleNumber, Player, PlayerIndex};
use crate::settlement::MAX_POINT_VALUE;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WolfChoice {
    Lone,
    Partner(PlayerIndex),
}

/// Who the wolf is on a hole and who, if anyone, they picked.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "RawPartnership", into = "RawPartnership")]
pub struct WolfPartnership {
    pub wolf: PlayerIndex,
    pub choice: WolfChoice,
    /// Points on this hole are played for quadruple stakes.
    pub quad: bool,
}

impl WolfPartnership {
    #[must_use]
    pub fn lone(wolf: PlayerIndex, quad: bool) -> Self {
        Self {
            wolf,
            choice: WolfChoice::Lone,
            quad,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the wolf picks themselves
    pub fn with_partner(
        wolf: PlayerIndex,
        partner: PlayerIndex,
        quad: bool,
    ) -> Result<Self, CoreError> {
        if wolf == partner {
            return Err(CoreError::Config(format!(
                "wolf {wolf} cannot partner with themselves"
            )));
        }
        Ok(Self {
            wolf,
            choice: WolfChoice::Partner(partner),
            quad,
        })
    }

    #[must_use]
    pub fn partner(&self) -> Option<PlayerIndex> {
        match self.choice {
            WolfChoice::Lone => None,
            WolfChoice::Partner(p) => Some(p),
        }
    }

    #[must_use]
    pub fn is_lone_wolf(&self) -> bool {
        matches!(self.choice, WolfChoice::Lone)
    }

    /// # Errors
    ///
    /// Will return `Err` if the wolf or partner does not refer to one of
    /// `player_count` players
    pub fn validate(&self, player_count: usize) -> Result<(), CoreError> {
        if !self.wolf.is_valid_for(player_count) {
            return Err(CoreError::Config(format!(
                "wolf {} is not one of the {player_count} players",
                self.wolf
            )));
        }
        if let Some(partner) = self.partner() {
            if partner == self.wolf {
                return Err(CoreError::Config(format!(
                    "wolf {partner} cannot partner with themselves"
                )));
            }
            if !partner.is_valid_for(player_count) {
                return Err(CoreError::Config(format!(
                    "partner {partner} is not one of the {player_count} players"
                )));
            }
        }
        Ok(())
    }
}

/// Wire form: a null partner or the lone flag both mean a lone wolf.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
struct RawPartnership {
    wolf: PlayerIndex,
    #[serde(default)]
    partner: Option<PlayerIndex>,
    #[serde(default)]
    lone_wolf: bool,
    #[serde(default)]
    quad: bool,
}

impl TryFrom<RawPartnership> for WolfPartnership {
    type Error = CoreError;

    fn try_from(raw: RawPartnership) -> Result<Self, Self::Error> {
        match raw.partner {
            Some(partner) if !raw.lone_wolf => Self::with_partner(raw.wolf, partner, raw.quad),
            _ => Ok(Self::lone(raw.wolf, raw.quad)),
        }
    }
}

impl From<WolfPartnership> for RawPartnership {
    fn from(value: WolfPartnership) -> Self {
        Self {
            wolf: value.wolf,
            partner: value.partner(),
            lone_wolf: value.is_lone_wolf(),
            quad: value.quad,
        }
    }
}

pub type Partnerships = BTreeMap<HoleNumber, WolfPartnership>;

/// Rotation of who tees off as the wolf.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct WolfOrder(Vec<PlayerIndex>);

impl WolfOrder {
    #[must_use]
    pub fn new(order: Vec<PlayerIndex>) -> Self {
        Self(order)
    }

    /// Players teeing off in index order.
    #[must_use]
    pub fn sequential(player_count: usize) -> Self {
        Self((0..player_count).map(PlayerIndex::new).collect())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PlayerIndex] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<usize>> for WolfOrder {
    fn from(value: Vec<usize>) -> Self {
        Self(value.into_iter().map(PlayerIndex::new).collect())
    }
}

/// Gross strokes by player and hole.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct HoleScoreMap(BTreeMap<PlayerIndex, BTreeMap<HoleNumber, u32>>);

impl HoleScoreMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_players(players: &[Player]) -> Self {
        let mut map = Self::new();
        for (i, player) in players.iter().enumerate() {
            for hole in HoleNumber::all() {
                if let Some(gross) = player.gross(hole) {
                    map.record(PlayerIndex::new(i), hole, gross);
                }
            }
        }
        map
    }

    pub fn record(&mut self, player: PlayerIndex, hole: HoleNumber, gross: u32) {
        let holes = self.0.entry(player).or_default();
        if gross == 0 {
            holes.remove(&hole);
        } else {
            holes.insert(hole, gross);
        }
    }

    #[must_use]
    pub fn gross(&self, player: PlayerIndex, hole: HoleNumber) -> Option<u32> {
        self.0
            .get(&player)
            .and_then(|holes| holes.get(&hole))
            .copied()
            .filter(|s| *s > 0)
    }

    /// A hole counts only once every player has a score on it.
    #[must_use]
    pub fn is_complete(&self, hole: HoleNumber, player_count: usize) -> bool {
        player_count > 0
            && (0..player_count).all(|i| self.gross(PlayerIndex::new(i), hole).is_some())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GameFormat {
    #[default]
    Wolf,
    StrokePlay,
    MatchPlay,
    Skins,
    Casual,
}

impl GameFormat {
    /// Formats where points are played for money.
    #[must_use]
    pub fn is_wager(self) -> bool {
        matches!(self, Self::Wolf | Self::Skins)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawWolfGame", into = "RawWolfGame")]
pub struct WolfGame {
    players: Vec<Player>,
    course: Course,
    order: WolfOrder,
    partnerships: Partnerships,
    format: GameFormat,
    point_value: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
struct RawWolfGame {
    players: Vec<Player>,
    #[serde(default)]
    course: Course,
    #[serde(default)]
    wolf_order: Option<WolfOrder>,
    #[serde(default)]
    partnerships: Vec<RawHolePartnership>,
    #[serde(default)]
    format: GameFormat,
    #[serde(default)]
    point_value: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
struct RawHolePartnership {
    hole: HoleNumber,
    wolf: PlayerIndex,
    #[serde(default)]
    partner: Option<PlayerIndex>,
    #[serde(default)]
    lone_wolf: bool,
    #[serde(default)]
    quad: bool,
}

impl RawHolePartnership {
    fn split(self) -> Result<(HoleNumber, WolfPartnership), CoreError> {
        let partnership = WolfPartnership::try_from(RawPartnership {
            wolf: self.wolf,
            partner: self.partner,
            lone_wolf: self.lone_wolf,
            quad: self.quad,
        })?;
        Ok((self.hole, partnership))
    }
}

impl TryFrom<RawWolfGame> for WolfGame {
    type Error = CoreError;

    fn try_from(raw: RawWolfGame) -> Result<Self, Self::Error> {
        let order = raw
            .wolf_order
            .unwrap_or_else(|| WolfOrder::sequential(raw.players.len()));
        let mut game = Self::new(raw.players, raw.course, order)?
            .with_format(raw.format)
            .with_point_value(raw.point_value)?;
        for entry in raw.partnerships {
            let (hole, partnership) = entry.split()?;
            game.set_partnership(hole, partnership)?;
        }
        Ok(game)
    }
}

impl From<WolfGame> for RawWolfGame {
    fn from(game: WolfGame) -> Self {
        Self {
            players: game.players,
            course: game.course,
            wolf_order: Some(game.order),
            partnerships: game
                .partnerships
                .into_iter()
                .map(|(hole, partnership)| RawHolePartnership {
                    hole,
                    wolf: partnership.wolf,
                    partner: partnership.partner(),
                    lone_wolf: partnership.is_lone_wolf(),
                    quad: partnership.quad,
                })
                .collect(),
            format: game.format,
            point_value: game.point_value,
        }
    }
}

impl WolfGame {
    /// # Errors
    ///
    /// Will return `Err` if the wolf order names a player that is not in the game
    pub fn new(players: Vec<Player>, course: Course, order: WolfOrder) -> Result<Self, CoreError> {
        if let Some(bad) = order
            .as_slice()
            .iter()
            .find(|p| !p.is_valid_for(players.len()))
        {
            return Err(CoreError::Config(format!(
                "wolf order names player {bad} but the game has {} players",
                players.len()
            )));
        }
        Ok(Self {
            players,
            course,
            order,
            partnerships: Partnerships::new(),
            format: GameFormat::default(),
            point_value: None,
        })
    }

    #[must_use]
    pub fn with_format(mut self, format: GameFormat) -> Self {
        self.format = format;
        self
    }

    /// # Errors
    ///
    /// Will return `Err` if the stake is negative, not a finite number or
    /// above `MAX_POINT_VALUE`
    pub fn with_point_value(mut self, point_value: Option<f64>) -> Result<Self, CoreError> {
        if let Some(value) = point_value {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "point value {value} must be a non-negative amount"
                )));
            }
            if value > MAX_POINT_VALUE {
                return Err(CoreError::Config(format!(
                    "point value {value} is above the {MAX_POINT_VALUE} limit"
                )));
            }
        }
        self.point_value = point_value;
        Ok(self)
    }

    /// # Errors
    ///
    /// Will return `Err` if the partnership refers to players outside the game
    pub fn set_partnership(
        &mut self,
        hole: HoleNumber,
        partnership: WolfPartnership,
    ) -> Result<(), CoreError> {
        partnership.validate(self.players.len())?;
        self.partnerships.insert(hole, partnership);
        Ok(())
    }

    /// Records gross strokes for a player; 0 clears the hole.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the player is not in the game
    pub fn record_score(
        &mut self,
        player: PlayerIndex,
        hole: HoleNumber,
        gross: u32,
    ) -> Result<(), CoreError> {
        let slot = self
            .players
            .get_mut(player.get())
            .ok_or_else(|| CoreError::NotFound(format!("player {player}")))?;
        slot.scores[hole.index()] = gross;
        Ok(())
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    #[must_use]
    pub fn order(&self) -> &WolfOrder {
        &self.order
    }

    #[must_use]
    pub fn partnerships(&self) -> &Partnerships {
        &self.partnerships
    }

    #[must_use]
    pub fn format(&self) -> GameFormat {
        self.format
    }

    #[must_use]
    pub fn point_value(&self) -> Option<f64> {
        self.point_value
    }

    #[must_use]
    pub fn hole_scores(&self) -> HoleScoreMap {
        HoleScoreMap::from_players(&self.players)
    }
}
