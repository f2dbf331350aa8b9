//! Property tests for role assignment (pure domain).
//!
//! Properties tested:
//! - Exactly one spy, N entries, every input player exactly once
//! - All non-spy entries share one word; the spy has none
//! - The spy's hint comes from the category (or is absent)
//! - Same seed, same assignment

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::domain::roles::{assign_roles, NO_WORD_SENTINEL};
use crate::domain::{test_gens, test_prelude, SeededRng};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: one spy, full roster, no duplicates
    #[test]
    fn prop_exactly_one_spy_and_full_roster(
        players in test_gens::roster_up_to(24),
        category in test_gens::category(),
        seed in any::<u64>(),
    ) {
        let mut rng = SeededRng::new(seed);
        let roles = assign_roles(&players, &category, &mut rng).unwrap();

        prop_assert_eq!(roles.len(), players.len());
        prop_assert_eq!(roles.iter().filter(|r| r.is_spy).count(), 1);

        let assigned: BTreeSet<_> = roles.iter().map(|r| r.player.id).collect();
        let input: BTreeSet<_> = players.iter().map(|p| p.id).collect();
        prop_assert_eq!(assigned.len(), roles.len(), "duplicate player in assignment");
        prop_assert_eq!(assigned, input);
    }

    /// Property: non-spy words are identical; spy word is None
    #[test]
    fn prop_citizens_share_word(
        players in test_gens::roster_up_to(24),
        category in test_gens::category(),
        seed in any::<u64>(),
    ) {
        let mut rng = SeededRng::new(seed);
        let roles = assign_roles(&players, &category, &mut rng).unwrap();

        let words: BTreeSet<_> = roles
            .iter()
            .filter(|r| !r.is_spy)
            .map(|r| r.word.clone())
            .collect();
        prop_assert!(words.len() <= 1);
        if let Some(word) = words.into_iter().next() {
            let word = word.expect("citizen must have a word");
            if category.items.is_empty() {
                prop_assert_eq!(word, NO_WORD_SENTINEL);
            } else {
                prop_assert!(category.items.contains(&word));
            }
        }

        for spy in roles.iter().filter(|r| r.is_spy) {
            prop_assert!(spy.word.is_none());
            match &spy.hint {
                Some(h) => prop_assert!(category.hints.contains(h)),
                None => prop_assert!(category.hints.is_empty()),
            }
        }
    }

    /// Property: seeded assignment is reproducible
    #[test]
    fn prop_same_seed_same_roles(
        players in test_gens::roster_up_to(12),
        category in test_gens::category(),
        seed in any::<u64>(),
    ) {
        let a = assign_roles(&players, &category, &mut SeededRng::new(seed)).unwrap();
        let b = assign_roles(&players, &category, &mut SeededRng::new(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}
