use tracing::debug;

use super::SessionFlow;
use crate::domain::state::{require_reveal, Phase};
use crate::errors::domain::{DomainError, StateKind};

/// Result of a forward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved within the current phase.
    Moved { index: usize },
    /// The last player stepped forward and the session entered a new phase.
    Entered(Phase),
}

impl SessionFlow {
    /// Hand the phone to the next player.
    ///
    /// In RoleReveal the step after the last player enters Discussion; in
    /// Voting it computes the tally and enters Results.
    pub fn advance(&mut self) -> Result<Step, DomainError> {
        match self.state.phase {
            Phase::RoleReveal => self.advance_reveal(),
            Phase::Voting => self.advance_vote(),
            Phase::Setup => Err(DomainError::state(
                StateKind::NotStarted,
                "advance: session has not started",
            )),
            other => Err(DomainError::state(
                StateKind::PhaseMismatch,
                format!("advance: nothing to step through in {other:?}"),
            )),
        }
    }

    /// Hand the phone back to the previous player.
    ///
    /// Returns `false` (no change) on the first player. In Voting, stepping
    /// back re-opens both the vote being left and the vote of the player now
    /// holding the phone.
    pub fn retreat(&mut self) -> Result<bool, DomainError> {
        match self.state.phase {
            Phase::RoleReveal => self.retreat_reveal(),
            Phase::Voting => self.retreat_vote(),
            Phase::Setup => Err(DomainError::state(
                StateKind::NotStarted,
                "retreat: session has not started",
            )),
            other => Err(DomainError::state(
                StateKind::PhaseMismatch,
                format!("retreat: nothing to step through in {other:?}"),
            )),
        }
    }

    fn advance_reveal(&mut self) -> Result<Step, DomainError> {
        let mut reveal = require_reveal(&self.state, "advance_reveal")?;
        let before = self.lifecycle();

        if reveal.advance() {
            self.state.reveal = Some(reveal);
            self.publish(before, Vec::new());
            return Ok(Step::Moved {
                index: reveal.current(),
            });
        }

        debug!(round_no = self.state.round_no, "All roles revealed");
        self.state.reveal = None;
        self.state.timer.reset(self.config.discussion_seconds);
        self.state.phase = Phase::Discussion;
        self.publish(before, Vec::new());
        Ok(Step::Entered(Phase::Discussion))
    }

    fn retreat_reveal(&mut self) -> Result<bool, DomainError> {
        let mut reveal = require_reveal(&self.state, "retreat_reveal")?;
        let before = self.lifecycle();
        if !reveal.retreat() {
            return Ok(false);
        }
        self.state.reveal = Some(reveal);
        self.publish(before, Vec::new());
        Ok(true)
    }
}
