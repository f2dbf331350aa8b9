//! Discussion countdown.
//!
//! The timer owns no clock. The host pumps [`RoundTimer::tick`] once per
//! second; everything else is a plain state transition.

use serde::Serialize;

use crate::errors::domain::{DomainError, StateKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    Stopped,
    Running,
    Paused,
    /// Terminal until the next `reset`.
    Expired,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Timer was not running; nothing changed.
    Idle,
    /// One second elapsed; `remaining` seconds left.
    Counted { remaining: u32 },
    /// This tick hit zero. Reported exactly once per countdown.
    Expired,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RoundTimer {
    duration: u32,
    remaining: u32,
    state: TimerState,
}

impl RoundTimer {
    pub fn new(duration_seconds: u32) -> Self {
        Self {
            duration: duration_seconds,
            remaining: duration_seconds,
            state: TimerState::Stopped,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn is_expired(&self) -> bool {
        self.state == TimerState::Expired
    }

    /// Stopped/Paused -> Running.
    ///
    /// Starting a zero-length countdown expires it on the spot and returns
    /// `TickOutcome::Expired` so the caller still sees the signal once.
    pub fn start(&mut self) -> Result<TickOutcome, DomainError> {
        match self.state {
            TimerState::Stopped | TimerState::Paused => {
                if self.remaining == 0 {
                    self.state = TimerState::Expired;
                    return Ok(TickOutcome::Expired);
                }
                self.state = TimerState::Running;
                Ok(TickOutcome::Idle)
            }
            other => Err(DomainError::state(
                StateKind::TimerNotStartable,
                format!("Cannot start timer while {other:?}"),
            )),
        }
    }

    /// Running -> Paused; no-op in every other state.
    pub fn pause(&mut self) -> bool {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
            return true;
        }
        false
    }

    /// Paused -> Running.
    pub fn resume(&mut self) -> Result<(), DomainError> {
        if self.state != TimerState::Paused {
            return Err(DomainError::state(
                StateKind::TimerNotStartable,
                format!("Cannot resume timer while {:?}", self.state),
            ));
        }
        self.state = TimerState::Running;
        Ok(())
    }

    /// Any state -> Stopped with a fresh countdown.
    pub fn reset(&mut self, duration_seconds: u32) {
        self.duration = duration_seconds;
        self.remaining = duration_seconds;
        self.state = TimerState::Stopped;
    }

    /// Stop counting without touching the remaining time.
    pub fn halt(&mut self) {
        if matches!(self.state, TimerState::Running | TimerState::Paused) {
            self.state = TimerState::Stopped;
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state != TimerState::Running {
            return TickOutcome::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = TimerState::Expired;
            TickOutcome::Expired
        } else {
            TickOutcome::Counted {
                remaining: self.remaining,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_ticks_expire_exactly_once() {
        let mut timer = RoundTimer::new(10);
        timer.reset(30);
        timer.start().unwrap();

        let mut expirations = 0;
        for _ in 0..30 {
            if timer.tick() == TickOutcome::Expired {
                expirations += 1;
            }
        }
        assert_eq!(expirations, 1);
        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.state(), TimerState::Expired);

        for _ in 0..5 {
            assert_eq!(timer.tick(), TickOutcome::Idle);
        }
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn tick_is_noop_unless_running() {
        let mut timer = RoundTimer::new(5);
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining(), 5);

        timer.start().unwrap();
        assert_eq!(timer.tick(), TickOutcome::Counted { remaining: 4 });
        assert!(timer.pause());
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining(), 4);

        timer.resume().unwrap();
        assert_eq!(timer.tick(), TickOutcome::Counted { remaining: 3 });
    }

    #[test]
    fn pause_is_noop_outside_running() {
        let mut timer = RoundTimer::new(5);
        assert!(!timer.pause());
        assert_eq!(timer.state(), TimerState::Stopped);
    }

    #[test]
    fn invalid_start_and_resume_are_rejected() {
        let mut timer = RoundTimer::new(5);
        assert!(timer.resume().is_err());
        timer.start().unwrap();
        assert!(timer.start().is_err());

        let mut done = RoundTimer::new(1);
        done.start().unwrap();
        assert_eq!(done.tick(), TickOutcome::Expired);
        assert!(done.start().is_err());
        assert!(done.resume().is_err());
    }

    #[test]
    fn start_from_paused_resumes() {
        let mut timer = RoundTimer::new(5);
        timer.start().unwrap();
        timer.pause();
        timer.start().unwrap();
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn reset_from_expired_allows_restart() {
        let mut timer = RoundTimer::new(1);
        timer.start().unwrap();
        timer.tick();
        timer.reset(3);
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.remaining(), 3);
        assert!(timer.start().is_ok());
    }

    #[test]
    fn zero_duration_expires_on_start() {
        let mut timer = RoundTimer::new(0);
        assert_eq!(timer.start().unwrap(), TickOutcome::Expired);
        assert!(timer.is_expired());
        assert_eq!(timer.tick(), TickOutcome::Idle);
    }

    #[test]
    fn halt_keeps_remaining() {
        let mut timer = RoundTimer::new(9);
        timer.start().unwrap();
        timer.tick();
        timer.halt();
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.remaining(), 8);
    }
}
