use crate::model::{HoleNumber, HoleScoreMap, Partnerships, Player, PlayerIndex, WolfOrder};
use crate::wolf::points::cumulative_points;
use crate::wolf::strokes::StrokeAllocation;

/// From this hole on, the player trailing on points is the wolf.
pub const FLOATING_WOLF_FROM: u32 = 16;

/// Who is the wolf on `current_hole`. `None` when there is no rotation.
#[must_use]
pub fn current_wolf<P: StrokeAllocation + ?Sized>(
    current_hole: HoleNumber,
    order: &WolfOrder,
    players: &[Player],
    partnerships: &Partnerships,
    hole_scores: &HoleScoreMap,
    policy: &P,
) -> Option<PlayerIndex> {
    let slots = order.as_slice();
    if slots.is_empty() {
        return None;
    }
    let start = current_hole.index() % slots.len();
    if current_hole.get() < FLOATING_WOLF_FROM {
        return Some(slots[start]);
    }

    let totals = cumulative_points(current_hole, partnerships, hole_scores, players, policy);
    let Some(&lowest) = totals.iter().min() else {
        return Some(slots[start]);
    };
    let trailing: Vec<PlayerIndex> = totals
        .iter()
        .enumerate()
        .filter(|(_, points)| **points == lowest)
        .map(|(i, _)| PlayerIndex::new(i))
        .collect();

    if let [only] = trailing.as_slice() {
        return Some(*only);
    }
    slots
        .iter()
        .cycle()
        .skip(start)
        .take(slots.len())
        .find(|slot| trailing.contains(slot))
        .or_else(|| trailing.first())
        .copied()
}
