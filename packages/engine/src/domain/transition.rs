use serde::Serialize;

use crate::domain::player::PlayerId;
use crate::domain::state::{Phase, SessionState};

/// The slice of session state that notifications are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLifecycleView {
    pub phase: Phase,
    pub round_no: u32,
    pub turn: Option<usize>,
    pub timer_expired: bool,
}

impl SessionLifecycleView {
    pub fn of(state: &SessionState) -> Self {
        Self {
            phase: state.phase,
            round_no: state.round_no,
            turn: state.turn_index(),
            timer_expired: matches!(state.phase, Phase::Discussion | Phase::Voting)
                && state.timer.is_expired(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionTransition {
    /// Edge-triggered: the discussion countdown hit zero.
    TimerExpired,

    /// Edge-triggered: a new round began (start or restart).
    RoundStarted { round_no: u32 },

    /// Edge-triggered: the session moved between phases.
    PhaseChanged { from: Phase, to: Phase },

    /// Edge-triggered: a different player now holds the phone.
    TurnChanged { index: usize },

    /// Explicit: a vote was cast or replaced.
    VoteRecorded { voter: PlayerId, votee: PlayerId },

    /// Explicit: a vote was re-opened by stepping back.
    VoteRevoked { voter: PlayerId },
}

/// Derive edge-triggered transitions from before/after lifecycle views.
pub fn derive_session_transitions(
    before: &SessionLifecycleView,
    after: &SessionLifecycleView,
) -> Vec<SessionTransition> {
    let mut transitions = Vec::new();

    // 1. Timer expiry (reported before any phase change it causes)
    if !before.timer_expired && after.timer_expired {
        transitions.push(SessionTransition::TimerExpired);
    }

    // 2. New round
    if after.round_no != before.round_no && after.phase == Phase::RoleReveal {
        transitions.push(SessionTransition::RoundStarted {
            round_no: after.round_no,
        });
    }

    // 3. Phase change
    if before.phase != after.phase {
        transitions.push(SessionTransition::PhaseChanged {
            from: before.phase,
            to: after.phase,
        });
    }

    // 4. Turn change (including the first turn of a new phase)
    if let Some(index) = after.turn {
        if before.phase != after.phase || before.turn != after.turn {
            transitions.push(SessionTransition::TurnChanged { index });
        }
    }

    transitions
}
