#![allow(dead_code)]

use rusty_club::model::{
    Course, HoleNumber, HoleScoreMap, Partnerships, Player, PlayerIndex, WolfPartnership,
};
use rusty_club::wolf::StrokePolicy;

pub fn hole(n: u32) -> HoleNumber {
    HoleNumber::new(n).expect("test hole should be on the course")
}

pub fn p(i: usize) -> PlayerIndex {
    PlayerIndex::new(i)
}

/// Scratch players named A, B, C, ...
pub fn scratch_players(count: usize) -> Vec<Player> {
    ["A", "B", "C", "D", "E", "F"]
        .iter()
        .take(count)
        .map(|name| Player::new(*name, 0.0))
        .collect()
}

/// Sets every player's gross score on one hole.
pub fn score_hole(players: &mut [Player], hole: HoleNumber, gross: &[u32]) {
    for (player, g) in players.iter_mut().zip(gross) {
        player.scores[hole.index()] = *g;
    }
}

pub fn lone(wolf: usize, quad: bool) -> WolfPartnership {
    WolfPartnership::lone(p(wolf), quad)
}

pub fn pair(wolf: usize, partner: usize, quad: bool) -> WolfPartnership {
    WolfPartnership::with_partner(p(wolf), p(partner), quad).expect("distinct wolf and partner")
}

pub fn partnerships(entries: &[(u32, WolfPartnership)]) -> Partnerships {
    entries.iter().map(|(h, w)| (hole(*h), *w)).collect()
}

pub fn policy() -> StrokePolicy {
    StrokePolicy::new(Course::default())
}

pub fn scores(players: &[Player]) -> HoleScoreMap {
    HoleScoreMap::from_players(players)
}
