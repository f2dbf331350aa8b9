//! Injected randomness for role assignment, voting order and tie-breaks.
//!
//! The engine never reaches for a global RNG. Callers hand a session a
//! `RandomSource`; production uses [`SeededRng`] (ChaCha20, seeded from
//! entropy or a known seed) and tests use a fixed seed or [`ScriptedRng`].

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Minimal capability the engine needs from a random number generator.
pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` is always at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// ChaCha20-backed source; identical seeds give identical sessions.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: ChaCha20Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Seed from the thread-local generator (non-deterministic play).
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl RandomSource for SeededRng {
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index bound must be >= 1");
        self.inner.random_range(0..bound.max(1))
    }
}

/// Replays a fixed list of draws, then keeps returning 0.
///
/// Each draw is reduced modulo the requested bound so a script can never
/// produce an out-of-range index.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    draws: VecDeque<usize>,
}

impl ScriptedRng {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        let bound = bound.max(1);
        self.draws.pop_front().unwrap_or(0) % bound
    }
}

/// Fisher-Yates shuffle driven by an injected source.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Uniform pick from a slice, `None` when empty.
pub fn pick<'a, T>(items: &'a [T], rng: &mut dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.next_index(items.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rng_is_deterministic() {
        let mut a = SeededRng::new(12345);
        let mut b = SeededRng::new(12345);
        let xs: Vec<_> = (0..16).map(|_| a.next_index(10)).collect();
        let ys: Vec<_> = (0..16).map(|_| b.next_index(10)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| x < 10));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SeededRng::new(7);
        let mut v: Vec<u32> = (0..20).collect();
        shuffle(&mut v, &mut rng);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn scripted_draws_wrap_and_default_to_zero() {
        let mut rng = ScriptedRng::new([5, 1]);
        assert_eq!(rng.next_index(3), 2);
        assert_eq!(rng.next_index(3), 1);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(rng.next_index(3), 0);
    }

    #[test]
    fn scripted_identity_shuffle() {
        // j == i on every step leaves the slice untouched
        let mut rng = ScriptedRng::new([3, 2, 1]);
        let mut v = vec!['a', 'b', 'c', 'd'];
        shuffle(&mut v, &mut rng);
        assert_eq!(v, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn pick_handles_empty() {
        let mut rng = SeededRng::new(1);
        let empty: [u8; 0] = [];
        assert!(pick(&empty, &mut rng).is_none());
        assert_eq!(pick(&[9u8], &mut rng), Some(&9));
    }
}
