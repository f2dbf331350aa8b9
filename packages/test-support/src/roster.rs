//! Plain roster fixtures.
//!
//! Kept free of engine types so this crate stays a leaf; callers map the
//! tuples onto their own player type.

/// Player names used throughout the scenario tests, in setup order.
pub const NAMES: [&str; 8] = [
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi",
];

/// `(id, name, color)` for the first `count` players. Ids start at 1.
///
/// # Panics
/// When `count` exceeds [`NAMES`].
pub fn named(count: usize) -> Vec<(u32, &'static str, String)> {
    assert!(count <= NAMES.len(), "at most {} named players", NAMES.len());
    NAMES
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, name)| (i as u32 + 1, *name, format!("color-{}", i + 1)))
        .collect()
}
