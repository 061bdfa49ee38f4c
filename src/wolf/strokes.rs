use std::collections::{BTreeSet, HashMap};

use crate::model::{Course, Player, PlayerIndex, StrokeMode, WolfGame};

/// Decides whether a player gets a handicap stroke on a hole.
pub trait StrokeAllocation {
    fn receives_stroke(&self, player: &Player, player_index: PlayerIndex, hole_index: usize)
    -> bool;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StrokePolicy {
    course: Course,
    manual_holes: HashMap<PlayerIndex, BTreeSet<usize>>,
}

impl StrokePolicy {
    #[must_use]
    pub fn new(course: Course) -> Self {
        Self {
            course,
            manual_holes: HashMap::new(),
        }
    }

    /// Policy for a game, with stroke holes worked out for every manual
    /// player that has a strokes-received count.
    #[must_use]
    pub fn for_game(game: &WolfGame) -> Self {
        let mut policy = Self::new(game.course().clone());
        for (i, player) in game.players().iter().enumerate() {
            if player.stroke_mode != StrokeMode::Manual {
                continue;
            }
            if let Some(strokes) = player.strokes_received {
                policy.set_manual_holes(
                    PlayerIndex::new(i),
                    manual_stroke_holes(strokes, game.course()),
                );
            }
        }
        policy
    }

    pub fn set_manual_holes(&mut self, player: PlayerIndex, holes: BTreeSet<usize>) {
        self.manual_holes.insert(player, holes);
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    fn by_stroke_index(&self, player: &Player, hole_index: usize) -> bool {
        self.course
            .stroke_index(hole_index)
            .is_some_and(|rank| i64::from(rank) <= player.rounded_handicap())
    }
}

impl StrokeAllocation for StrokePolicy {
    fn receives_stroke(
        &self,
        player: &Player,
        player_index: PlayerIndex,
        hole_index: usize,
    ) -> bool {
        match player.stroke_mode {
            StrokeMode::Manual => self
                .manual_holes
                .get(&player_index)
                .is_some_and(|holes| holes.contains(&hole_index)),
            StrokeMode::Auto => self.by_stroke_index(player, hole_index),
            StrokeMode::AllButPar3 => {
                !self.course.is_par3(hole_index) && self.by_stroke_index(player, hole_index)
            }
        }
    }
}

/// The `strokes` hardest holes on the course, as 0-based hole indices.
#[must_use]
pub fn manual_stroke_holes(strokes: u32, course: &Course) -> BTreeSet<usize> {
    course
        .holes_by_difficulty()
        .into_iter()
        .take(strokes as usize)
        .collect()
}

#[must_use]
pub fn net_score(gross: u32, receives_stroke: bool) -> u32 {
    if receives_stroke {
        gross.saturating_sub(1)
    } else {
        gross
    }
}
