use tracing::{debug, info};

use super::{SessionFlow, Step};
use crate::domain::player::PlayerId;
use crate::domain::rng::{shuffle, SeededRng};
use crate::domain::roles::secret_word;
use crate::domain::seed_derivation::derive_voting_seed;
use crate::domain::state::{require_phase, require_spy, require_voting, Phase, RoundOutcome};
use crate::domain::transition::SessionTransition;
use crate::domain::turns::TurnSequencer;
use crate::domain::votes::VoteTally;
use crate::errors::domain::{DomainError, StateKind, ValidationKind};

impl SessionFlow {
    /// Record `voter`'s vote for `votee`.
    ///
    /// Voting only, and only for the player currently holding the phone.
    /// Re-recording replaces the previous vote.
    pub fn record_vote(&mut self, voter: PlayerId, votee: PlayerId) -> Result<(), DomainError> {
        require_phase(&self.state, Phase::Voting, "record_vote")?;
        let current = self.current_voter()?;
        if voter != current {
            return Err(DomainError::state(
                StateKind::OutOfTurn,
                format!("Player {voter} is not the current voter ({current})"),
            ));
        }
        if self.state.player(votee).is_none() {
            return Err(DomainError::validation(
                ValidationKind::UnknownPlayer,
                format!("Player {votee} is not in this session"),
            ));
        }

        let before = self.lifecycle();
        let replaced = self.state.votes.record(voter, votee)?;
        debug!(voter, votee, ?replaced, "Vote recorded");
        self.publish(
            before,
            vec![SessionTransition::VoteRecorded { voter, votee }],
        );
        Ok(())
    }

    /// Record a vote on behalf of the current voter.
    pub fn vote(&mut self, votee: PlayerId) -> Result<(), DomainError> {
        require_phase(&self.state, Phase::Voting, "vote")?;
        let voter = self.current_voter()?;
        self.record_vote(voter, votee)
    }

    /// The tally computed when voting finished. Results only.
    pub fn tally(&self) -> Result<&VoteTally, DomainError> {
        require_phase(&self.state, Phase::Results, "tally")?;
        self.state.tally.as_ref().ok_or_else(|| {
            DomainError::validation_other("Invariant violated: tally must be set in Results")
        })
    }

    pub(super) fn current_voter(&self) -> Result<PlayerId, DomainError> {
        let voting = require_voting(&self.state, "current_voter")?;
        self.voter_at(voting.current())
    }

    fn voter_at(&self, index: usize) -> Result<PlayerId, DomainError> {
        self.state.voting_order.get(index).copied().ok_or_else(|| {
            DomainError::validation_other("Invariant violated: voter index out of range")
        })
    }

    /// Discussion -> Voting. Shared by `begin_voting` and timer auto-advance.
    pub(super) fn enter_voting(&mut self) -> Result<(), DomainError> {
        let mut order: Vec<PlayerId> = self
            .state
            .assignments
            .iter()
            .map(|a| a.player_id())
            .collect();

        if self.config.reshuffle_voting_order {
            match self.seed {
                Some(seed) => {
                    let mut rng = SeededRng::new(derive_voting_seed(seed, self.state.round_no));
                    shuffle(&mut order, &mut rng);
                }
                None => shuffle(&mut order, &mut *self.rng),
            }
        }
        let voting = TurnSequencer::new(order.len())?;

        debug!(round_no = self.state.round_no, ?order, "Voting order set");
        self.state.voting_order = order;
        self.state.voting = Some(voting);
        self.state.votes.clear();
        self.state.phase = Phase::Voting;
        Ok(())
    }

    pub(super) fn advance_vote(&mut self) -> Result<Step, DomainError> {
        let mut voting = require_voting(&self.state, "advance_vote")?;
        let voter = self.current_voter()?;
        if !self.config.allow_abstain && !self.state.votes.has_voted(voter) {
            return Err(DomainError::state(
                StateKind::VoteMissing,
                format!("Player {voter} has not voted yet"),
            ));
        }

        let before = self.lifecycle();
        if voting.advance() {
            self.state.voting = Some(voting);
            self.publish(before, Vec::new());
            return Ok(Step::Moved {
                index: voting.current(),
            });
        }

        self.finish_voting()?;
        self.publish(before, Vec::new());
        Ok(Step::Entered(Phase::Results))
    }

    pub(super) fn retreat_vote(&mut self) -> Result<bool, DomainError> {
        let mut voting = require_voting(&self.state, "retreat_vote")?;
        let leaving = self.current_voter()?;
        if !voting.retreat() {
            return Ok(false);
        }
        let returning = self.voter_at(voting.current())?;

        let before = self.lifecycle();
        self.state.voting = Some(voting);

        let mut revoked = Vec::new();
        for voter in [leaving, returning] {
            if self.state.votes.revoke(voter).is_some() {
                debug!(voter, "Vote re-opened");
                revoked.push(SessionTransition::VoteRevoked { voter });
            }
        }
        self.publish(before, revoked);
        Ok(true)
    }

    fn finish_voting(&mut self) -> Result<(), DomainError> {
        let spy = require_spy(&self.state, "finish_voting")?;
        let players = self.state.player_ids();
        let tally = self
            .state
            .votes
            .tally(&players, spy, self.config.tie_break, &mut *self.rng);

        let outcome = RoundOutcome {
            round_no: self.state.round_no,
            spy,
            word: secret_word(&self.state.assignments).map(str::to_string),
            leader: tally.leader,
            caught: tally.is_spy_caught,
        };
        info!(
            round_no = outcome.round_no,
            spy,
            leader = ?tally.leader,
            caught = tally.is_spy_caught,
            votes = self.state.votes.len(),
            "Voting finished"
        );

        self.state.history.push(outcome);
        self.state.tally = Some(tally);
        self.state.voting = None;
        self.state.phase = Phase::Results;
        Ok(())
    }
}
