// Proptest generators for domain types.
// Rosters always carry unique ids and colors, matching what setup hands the engine.

use proptest::prelude::*;

use crate::domain::{Category, Player, PlayerColor, PlayerId};

/// Roster of `count` players with ids 1..=count.
pub fn roster(count: usize) -> Vec<Player> {
    (1..=count as PlayerId)
        .map(|id| {
            Player::new(
                id,
                format!("Player {id}"),
                PlayerColor::new(format!("color-{id}")),
            )
        })
        .collect()
}

/// Roster of 1 to `max_count` players.
pub fn roster_up_to(max_count: usize) -> impl Strategy<Value = Vec<Player>> {
    (1..=max_count).prop_map(roster)
}

/// Category with 0-8 items and 0-4 hints (empty lists exercise the fallbacks).
pub fn category() -> impl Strategy<Value = Category> {
    (
        prop::collection::vec("[a-z]{3,8}", 0..8),
        prop::collection::vec("[a-z]{3,8}", 0..4),
    )
        .prop_map(|(items, hints)| {
            Category::new("generated", "Generated")
                .with_items(items)
                .with_hints(hints)
        })
}

/// Votes as (voter index, votee index) pairs into a roster of `count`.
/// Self-votes are filtered out.
pub fn votes(count: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..count, 0..count), 0..count * 2)
        .prop_map(|pairs| pairs.into_iter().filter(|(a, b)| a != b).collect())
}
