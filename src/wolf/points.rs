use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::model::{HoleNumber, HoleScoreMap, Partnerships, Player, PlayerIndex, WolfChoice};
use crate::wolf::strokes::{StrokeAllocation, net_score};

/// Points won on a single hole. Players who won nothing are absent.
pub type HolePoints = BTreeMap<PlayerIndex, u32>;

pub const LONE_WOLF_WIN: u32 = 4;
pub const LONE_WOLF_WIN_QUAD: u32 = 16;
pub const LONE_WOLF_LOSS: u32 = 2;
pub const LONE_WOLF_LOSS_QUAD: u32 = 4;
pub const PARTNERS_WIN: u32 = 1;
pub const PARTNERS_WIN_QUAD: u32 = 8;
pub const PARTNERS_LOSS: u32 = 1;
pub const PARTNERS_LOSS_QUAD: u32 = 4;

/// Net score of every player on a hole, or `None` while any player has
/// not been scored there.
#[must_use]
pub fn net_scores_for_hole<P: StrokeAllocation + ?Sized>(
    hole: HoleNumber,
    hole_scores: &HoleScoreMap,
    players: &[Player],
    policy: &P,
) -> Option<Vec<u32>> {
    players
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let index = PlayerIndex::new(i);
            hole_scores.gross(index, hole).map(|gross| {
                net_score(gross, policy.receives_stroke(player, index, hole.index()))
            })
        })
        .collect()
}

#[must_use]
pub fn points_for_hole<P: StrokeAllocation + ?Sized>(
    hole: HoleNumber,
    partnerships: &Partnerships,
    hole_scores: &HoleScoreMap,
    players: &[Player],
    policy: &P,
) -> HolePoints {
    let Some(partnership) = partnerships.get(&hole) else {
        return HolePoints::new();
    };
    if !hole_scores.is_complete(hole, players.len()) {
        debug!(hole = hole.get(), "hole not complete, no points yet");
        return HolePoints::new();
    }
    if partnership.validate(players.len()).is_err() {
        warn!(hole = hole.get(), ?partnership, "skipping hole with invalid partnership");
        return HolePoints::new();
    }
    let Some(net) = net_scores_for_hole(hole, hole_scores, players, policy) else {
        return HolePoints::new();
    };

    let wolf = partnership.wolf.get();
    let points = match partnership.choice {
        WolfChoice::Lone => lone_wolf_points(wolf, &net, partnership.quad),
        WolfChoice::Partner(partner) => partner_points(wolf, partner.get(), &net, partnership.quad),
    };
    debug!(hole = hole.get(), ?net, ?points, "hole scored");
    points
}

fn lone_wolf_points(wolf: usize, net: &[u32], quad: bool) -> HolePoints {
    let mut points = HolePoints::new();
    let field_best = net
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != wolf)
        .map(|(_, s)| *s)
        .min();
    let Some(field_best) = field_best else {
        return points;
    };

    match net[wolf].cmp(&field_best) {
        Ordering::Less => {
            let award = if quad { LONE_WOLF_WIN_QUAD } else { LONE_WOLF_WIN };
            points.insert(PlayerIndex::new(wolf), award);
        }
        Ordering::Greater => {
            let award = if quad { LONE_WOLF_LOSS_QUAD } else { LONE_WOLF_LOSS };
            for i in (0..net.len()).filter(|i| *i != wolf) {
                points.insert(PlayerIndex::new(i), award);
            }
        }
        Ordering::Equal => {}
    }
    points
}

fn partner_points(wolf: usize, partner: usize, net: &[u32], quad: bool) -> HolePoints {
    let mut points = HolePoints::new();
    let on_wolf_team = |i: usize| i == wolf || i == partner;

    let team_best = net[wolf].min(net[partner]);
    let opponents: Vec<usize> = (0..net.len()).filter(|i| !on_wolf_team(*i)).collect();
    let Some(opponent_best) = opponents.iter().map(|i| net[*i]).min() else {
        return points;
    };

    match team_best.cmp(&opponent_best) {
        Ordering::Less => {
            let award = if quad { PARTNERS_WIN_QUAD } else { PARTNERS_WIN };
            points.insert(PlayerIndex::new(wolf), award);
            points.insert(PlayerIndex::new(partner), award);
        }
        Ordering::Greater => {
            let award = if quad { PARTNERS_LOSS_QUAD } else { PARTNERS_LOSS };
            for i in opponents {
                points.insert(PlayerIndex::new(i), award);
            }
        }
        Ordering::Equal => {}
    }
    points
}

/// Points for one player summed over the whole round.
#[must_use]
pub fn total_points<P: StrokeAllocation + ?Sized>(
    player: PlayerIndex,
    partnerships: &Partnerships,
    hole_scores: &HoleScoreMap,
    players: &[Player],
    policy: &P,
) -> u32 {
    HoleNumber::all()
        .filter_map(|hole| {
            points_for_hole(hole, partnerships, hole_scores, players, policy)
                .get(&player)
                .copied()
        })
        .sum()
}

/// Holes on which a player won points, for the history view.
#[must_use]
pub fn points_by_hole<P: StrokeAllocation + ?Sized>(
    player: PlayerIndex,
    partnerships: &Partnerships,
    hole_scores: &HoleScoreMap,
    players: &[Player],
    policy: &P,
) -> BTreeMap<HoleNumber, u32> {
    HoleNumber::all()
        .filter_map(|hole| {
            points_for_hole(hole, partnerships, hole_scores, players, policy)
                .get(&player)
                .filter(|p| **p > 0)
                .map(|p| (hole, *p))
        })
        .collect()
}

/// Running totals for every player over the holes before `before`.
#[must_use]
pub fn cumulative_points<P: StrokeAllocation + ?Sized>(
    before: HoleNumber,
    partnerships: &Partnerships,
    hole_scores: &HoleScoreMap,
    players: &[Player],
    policy: &P,
) -> Vec<u32> {
    let mut totals = vec![0; players.len()];
    for hole in HoleNumber::all().take_while(|hole| *hole < before) {
        for (player, points) in points_for_hole(hole, partnerships, hole_scores, players, policy)
        {
            if let Some(total) = totals.get_mut(player.get()) {
                *total += points;
            }
        }
    }
    totals
}

/// Round totals for every player, indexed like `players`.
#[must_use]
pub fn points_table<P: StrokeAllocation + ?Sized>(
    partnerships: &Partnerships,
    hole_scores: &HoleScoreMap,
    players: &[Player],
    policy: &P,
) -> Vec<u32> {
    let mut totals = cumulative_points(HoleNumber::LAST, partnerships, hole_scores, players, policy);
    for (player, points) in
        points_for_hole(HoleNumber::LAST, partnerships, hole_scores, players, policy)
    {
        if let Some(total) = totals.get_mut(player.get()) {
            *total += points;
        }
    }
    totals
}
