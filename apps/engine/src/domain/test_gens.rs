// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::rules::PLAYERS;
use crate::domain::{PlayerId, RoleKind};

pub fn seat() -> impl Strategy<Value = PlayerId> {
    0..PLAYERS as PlayerId
}

/// A sequence of vote targets, as they would arrive at a tally.
pub fn ballot_targets() -> impl Strategy<Value = Vec<PlayerId>> {
    prop::collection::vec(seat(), 1..=12)
}

/// Valid role line-up in a random seat order.
pub fn lineup() -> impl Strategy<Value = Vec<RoleKind>> {
    Just(vec![
        RoleKind::Mafia,
        RoleKind::Doctor,
        RoleKind::Civilian,
        RoleKind::Civilian,
    ])
    .prop_shuffle()
}

/// (living Mafia, living non-Mafia) counts reachable with the fixed line-up.
pub fn living_counts() -> impl Strategy<Value = (usize, usize)> {
    (0usize..=1, 0usize..=3)
}
