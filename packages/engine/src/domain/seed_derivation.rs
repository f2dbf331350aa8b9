//! RNG seed derivation utilities for deterministic replays.
//!
//! A session created with a known base seed derives one seed per round (role
//! assignment) and one per voting-order shuffle, so restarting a round never
//! replays the previous round's roles.

/// Derive the seed used to assign roles for a 1-based round.
pub fn derive_round_seed(session_seed: u64, round_no: u32) -> u64 {
    session_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Derive the seed used to reshuffle the voting order for a round.
pub fn derive_voting_seed(session_seed: u64, round_no: u32) -> u64 {
    session_seed
        .wrapping_add((round_no as u64).wrapping_mul(10_000))
        .wrapping_add(1)
}
