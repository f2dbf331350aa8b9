//! Vote collection and tallying.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::player::PlayerId;
use crate::domain::rng::RandomSource;
use crate::errors::domain::{DomainError, ValidationKind};

/// How to pick a leader when several candidates share the top count.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// First tied candidate in player order.
    #[default]
    FirstInOrder,
    /// Uniform pick among the tied candidates.
    Random,
}

/// One vote per voter; re-recording overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteBook {
    votes: BTreeMap<PlayerId, PlayerId>,
}

impl VoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `voter -> votee`, returning the vote it replaced (if any).
    pub fn record(
        &mut self,
        voter: PlayerId,
        votee: PlayerId,
    ) -> Result<Option<PlayerId>, DomainError> {
        if voter == votee {
            return Err(DomainError::validation(
                ValidationKind::SelfVote,
                format!("Player {voter} cannot vote for themself"),
            ));
        }
        Ok(self.votes.insert(voter, votee))
    }

    /// Drop a voter's vote, returning it if one existed.
    pub fn revoke(&mut self, voter: PlayerId) -> Option<PlayerId> {
        self.votes.remove(&voter)
    }

    pub fn vote_of(&self, voter: PlayerId) -> Option<PlayerId> {
        self.votes.get(&voter).copied()
    }

    pub fn has_voted(&self, voter: PlayerId) -> bool {
        self.votes.contains_key(&voter)
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    pub fn clear(&mut self) {
        self.votes.clear();
    }

    /// Count votes per candidate and pick the leader.
    ///
    /// `players` fixes both the set of countable candidates and the order
    /// used by [`TieBreak::FirstInOrder`]. `rng` is only consulted for
    /// [`TieBreak::Random`] with an actual tie.
    pub fn tally(
        &self,
        players: &[PlayerId],
        spy: PlayerId,
        policy: TieBreak,
        rng: &mut dyn RandomSource,
    ) -> VoteTally {
        let mut counts: BTreeMap<PlayerId, u32> = BTreeMap::new();
        for &votee in self.votes.values() {
            if players.contains(&votee) {
                *counts.entry(votee).or_insert(0) += 1;
            }
        }

        let top = counts.values().copied().max().unwrap_or(0);
        let tied: Vec<PlayerId> = if top == 0 {
            Vec::new()
        } else {
            players
                .iter()
                .copied()
                .filter(|id| counts.get(id).copied() == Some(top))
                .collect()
        };

        let leader = match (policy, tied.len()) {
            (_, 0) => None,
            (TieBreak::FirstInOrder, _) | (TieBreak::Random, 1) => tied.first().copied(),
            (TieBreak::Random, n) => tied.get(rng.next_index(n)).copied(),
        };

        VoteTally {
            counts,
            leader,
            is_spy_caught: leader == Some(spy),
        }
    }
}

/// Result of a completed vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    /// Votes received per candidate; candidates with no votes are absent.
    pub counts: BTreeMap<PlayerId, u32>,
    pub leader: Option<PlayerId>,
    pub is_spy_caught: bool,
}

impl VoteTally {
    pub fn votes_for(&self, id: PlayerId) -> u32 {
        self.counts.get(&id).copied().unwrap_or(0)
    }
}
