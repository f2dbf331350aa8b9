use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::player::{Player, PlayerId};
use crate::domain::roles::{find_spy, RoleAssignment};
use crate::domain::timer::RoundTimer;
use crate::domain::turns::TurnSequencer;
use crate::domain::votes::{VoteBook, VoteTally};
use crate::errors::domain::{DomainError, StateKind};

/// Coarse-grained session progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Players and category not yet locked in.
    Setup,
    /// Phone passed around; each player privately sees their role.
    RoleReveal,
    /// Timed open discussion.
    Discussion,
    /// Phone passed around again; each player names a suspect.
    Voting,
    /// Tally computed; waiting for restart or exit.
    Results,
}

/// Summary of a finished round, kept across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round_no: u32,
    pub spy: PlayerId,
    /// `None` only when the spy was the sole player.
    pub word: Option<String>,
    pub leader: Option<PlayerId>,
    pub caught: bool,
}

/// Everything a session mutates. Owned exclusively by the orchestrator.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Current phase of the session.
    pub phase: Phase,
    /// 1-based round counter; 0 while in Setup.
    pub round_no: u32,
    /// Roster in setup order. Tie-breaks follow this order.
    pub players: Vec<Player>,
    /// Category chosen at setup; reused by restart.
    pub category: Option<Category>,
    /// Role assignments in reveal order.
    pub assignments: Vec<RoleAssignment>,
    /// Cursor over `assignments` (RoleReveal only).
    pub reveal: Option<TurnSequencer>,
    /// Voter ids in voting order (Voting/Results).
    pub voting_order: Vec<PlayerId>,
    /// Cursor over `voting_order` (Voting only).
    pub voting: Option<TurnSequencer>,
    pub timer: RoundTimer,
    pub votes: VoteBook,
    /// Set on the Voting -> Results transition.
    pub tally: Option<VoteTally>,
    /// Finished rounds, oldest first.
    pub history: Vec<RoundOutcome>,
}

impl SessionState {
    pub fn new(discussion_seconds: u32) -> Self {
        Self {
            phase: Phase::Setup,
            round_no: 0,
            players: Vec::new(),
            category: None,
            assignments: Vec::new(),
            reveal: None,
            voting_order: Vec::new(),
            voting: None,
            timer: RoundTimer::new(discussion_seconds),
            votes: VoteBook::new(),
            tally: None,
            history: Vec::new(),
        }
    }

    /// Index of the player acting right now, if the phase has one.
    pub fn turn_index(&self) -> Option<usize> {
        match self.phase {
            Phase::RoleReveal => self.reveal.map(|s| s.current()),
            Phase::Voting => self.voting.map(|s| s.current()),
            _ => None,
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }
}

/// Require a specific phase, otherwise a `State(PhaseMismatch)` error.
pub fn require_phase(
    state: &SessionState,
    expected: Phase,
    ctx: &'static str,
) -> Result<(), DomainError> {
    if state.phase == expected {
        return Ok(());
    }
    if state.phase == Phase::Setup {
        return Err(DomainError::state(
            StateKind::NotStarted,
            format!("{ctx}: session has not started"),
        ));
    }
    Err(DomainError::state(
        StateKind::PhaseMismatch,
        format!(
            "{ctx}: expected {expected:?}, session is in {:?}",
            state.phase
        ),
    ))
}

pub fn require_reveal(
    state: &SessionState,
    ctx: &'static str,
) -> Result<TurnSequencer, DomainError> {
    state.reveal.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: no reveal cursor ({ctx})"))
    })
}

pub fn require_voting(
    state: &SessionState,
    ctx: &'static str,
) -> Result<TurnSequencer, DomainError> {
    state.voting.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: no voting cursor ({ctx})"))
    })
}

pub fn require_spy(state: &SessionState, ctx: &'static str) -> Result<PlayerId, DomainError> {
    find_spy(&state.assignments)
        .map(RoleAssignment::player_id)
        .ok_or_else(|| {
            DomainError::validation_other(format!("Invariant violated: no spy assigned ({ctx})"))
        })
}

pub fn require_category<'a>(
    state: &'a SessionState,
    ctx: &'static str,
) -> Result<&'a Category, DomainError> {
    state.category.as_ref().ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: category must be set ({ctx})"))
    })
}
