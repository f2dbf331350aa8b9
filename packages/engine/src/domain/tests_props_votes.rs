//! Property tests for vote tallying (pure domain).
//!
//! Properties tested:
//! - Counts sum to the number of recorded votes
//! - The leader holds the maximum count
//! - First-in-order tie-break picks the earliest tied player
//! - `is_spy_caught` agrees with the leader

use proptest::prelude::*;

use crate::domain::votes::{TieBreak, VoteBook};
use crate::domain::{test_gens, test_prelude, PlayerId, SeededRng};

fn book_from(count: usize, pairs: &[(usize, usize)]) -> (Vec<PlayerId>, VoteBook) {
    let ids: Vec<PlayerId> = test_gens::roster(count).iter().map(|p| p.id).collect();
    let mut book = VoteBook::new();
    for &(voter, votee) in pairs {
        book.record(ids[voter], ids[votee]).unwrap();
    }
    (ids, book)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_counts_match_votes(
        (count, pairs) in (2usize..10).prop_flat_map(|n| (Just(n), test_gens::votes(n))),
        spy_idx in 0usize..10,
        seed in any::<u64>(),
    ) {
        let (ids, book) = book_from(count, &pairs);
        let spy = ids[spy_idx % count];
        let tally = book.tally(&ids, spy, TieBreak::FirstInOrder, &mut SeededRng::new(seed));

        let total: u32 = tally.counts.values().sum();
        prop_assert_eq!(total as usize, book.len());
        prop_assert_eq!(tally.is_spy_caught, tally.leader == Some(spy));

        match tally.leader {
            None => prop_assert!(book.is_empty()),
            Some(leader) => {
                let max = tally.counts.values().copied().max().unwrap_or(0);
                prop_assert_eq!(tally.votes_for(leader), max);
                let first_max = ids.iter().copied().find(|id| tally.votes_for(*id) == max);
                prop_assert_eq!(Some(leader), first_max);
            }
        }
    }

    #[test]
    fn prop_random_tie_break_stays_among_leaders(
        (count, pairs) in (2usize..10).prop_flat_map(|n| (Just(n), test_gens::votes(n))),
        seed in any::<u64>(),
    ) {
        let (ids, book) = book_from(count, &pairs);
        let tally = book.tally(&ids, ids[0], TieBreak::Random, &mut SeededRng::new(seed));
        if let Some(leader) = tally.leader {
            let max = tally.counts.values().copied().max().unwrap_or(0);
            prop_assert_eq!(tally.votes_for(leader), max);
        }
    }
}
