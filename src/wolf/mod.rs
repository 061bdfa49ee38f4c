pub mod points;
pub mod rotation;
pub mod strokes;

pub use points::*;
pub use rotation::*;
pub use strokes::*;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{HoleNumber, PlayerIndex, WolfGame};
use crate::settlement::{PlayerStanding, Settlement, settle_payments};

/// One player's line on the wolf results card.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WolfStanding {
    pub player: PlayerIndex,
    pub name: String,
    pub points: u32,
    pub running_total: u32,
    pub points_by_hole: BTreeMap<HoleNumber, u32>,
}

impl WolfGame {
    #[must_use]
    pub fn stroke_policy(&self) -> StrokePolicy {
        StrokePolicy::for_game(self)
    }

    #[must_use]
    pub fn points_for_hole(&self, hole: HoleNumber) -> HolePoints {
        points_for_hole(
            hole,
            self.partnerships(),
            &self.hole_scores(),
            self.players(),
            &self.stroke_policy(),
        )
    }

    #[must_use]
    pub fn total_points(&self, player: PlayerIndex) -> u32 {
        total_points(
            player,
            self.partnerships(),
            &self.hole_scores(),
            self.players(),
            &self.stroke_policy(),
        )
    }

    #[must_use]
    pub fn current_wolf(&self, current_hole: HoleNumber) -> Option<PlayerIndex> {
        current_wolf(
            current_hole,
            self.order(),
            self.players(),
            self.partnerships(),
            &self.hole_scores(),
            &self.stroke_policy(),
        )
    }

    #[must_use]
    pub fn standings(&self) -> Vec<WolfStanding> {
        let scores = self.hole_scores();
        let policy = self.stroke_policy();
        let totals = points_table(self.partnerships(), &scores, self.players(), &policy);
        self.players()
            .iter()
            .enumerate()
            .map(|(i, player)| {
                let index = PlayerIndex::new(i);
                WolfStanding {
                    player: index,
                    name: player.name.clone(),
                    points: totals[i],
                    running_total: player.running_total(),
                    points_by_hole: points_by_hole(
                        index,
                        self.partnerships(),
                        &scores,
                        self.players(),
                        &policy,
                    ),
                }
            })
            .collect()
    }

    /// Money owed between players, `None` unless the game is played for a stake.
    #[must_use]
    pub fn settle(&self) -> Option<Settlement> {
        let standings: Vec<PlayerStanding> = self
            .standings()
            .into_iter()
            .map(|s| PlayerStanding {
                name: s.name,
                points: s.points,
            })
            .collect();
        settle_payments(&standings, self.format(), self.point_value())
    }
}
