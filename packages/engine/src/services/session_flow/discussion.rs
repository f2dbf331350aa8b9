use tracing::{debug, info};

use super::SessionFlow;
use crate::domain::state::{require_phase, Phase};
use crate::domain::timer::TickOutcome;
use crate::errors::domain::DomainError;

impl SessionFlow {
    /// Start the discussion countdown. Discussion only.
    pub fn start_timer(&mut self) -> Result<(), DomainError> {
        require_phase(&self.state, Phase::Discussion, "start_timer")?;
        let before = self.lifecycle();
        let outcome = self.state.timer.start()?;
        debug!(
            remaining = self.state.timer.remaining(),
            "Discussion timer started"
        );
        self.after_timer_outcome(outcome)?;
        self.publish(before, Vec::new());
        Ok(())
    }

    /// Pause the countdown; `false` when it was not running.
    pub fn pause_timer(&mut self) -> Result<bool, DomainError> {
        require_phase(&self.state, Phase::Discussion, "pause_timer")?;
        Ok(self.state.timer.pause())
    }

    pub fn resume_timer(&mut self) -> Result<(), DomainError> {
        require_phase(&self.state, Phase::Discussion, "resume_timer")?;
        self.state.timer.resume()
    }

    /// One second of host time.
    ///
    /// Outside Discussion, or while the countdown is not running, this is a
    /// no-op returning `TickOutcome::Idle`, so hosts may pump it blindly.
    pub fn tick(&mut self) -> Result<TickOutcome, DomainError> {
        if self.state.phase != Phase::Discussion {
            return Ok(TickOutcome::Idle);
        }
        let before = self.lifecycle();
        let outcome = self.state.timer.tick();
        if outcome == TickOutcome::Expired {
            info!(round_no = self.state.round_no, "Discussion timer expired");
            self.after_timer_outcome(outcome)?;
            self.publish(before, Vec::new());
        }
        Ok(outcome)
    }

    /// Close discussion and open voting. Allowed any time during Discussion.
    pub fn begin_voting(&mut self) -> Result<(), DomainError> {
        require_phase(&self.state, Phase::Discussion, "begin_voting")?;
        let before = self.lifecycle();
        self.state.timer.halt();
        self.enter_voting()?;
        self.publish(before, Vec::new());
        Ok(())
    }

    fn after_timer_outcome(&mut self, outcome: TickOutcome) -> Result<(), DomainError> {
        if outcome == TickOutcome::Expired && self.config.auto_advance_on_expiry {
            debug!("Auto-advancing to voting on timer expiry");
            self.enter_voting()?;
        }
        Ok(())
    }
}
