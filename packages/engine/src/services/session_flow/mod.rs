//! Session orchestration service - drives one pass-and-play session through
//! role reveal, discussion, voting and results.
//!
//! The service owns the `SessionState` outright; the UI only talks to it
//! through the methods below and learns about changes through observers.
//! Each mutating method validates first and mutates second, so an `Err`
//! always leaves the session untouched.

mod discussion;
mod lifecycle;
mod navigation;
pub mod observer;
mod voting;


use tracing::debug;

use crate::config::SessionConfig;
use crate::domain::player::{Player, PlayerId};
use crate::domain::rng::{RandomSource, SeededRng};
use crate::domain::roles::RoleAssignment;
use crate::domain::seed_derivation::derive_round_seed;
use crate::domain::snapshot::{snapshot, RevealCard, SessionSnapshot};
use crate::domain::state::{require_phase, require_reveal, Phase, RoundOutcome, SessionState};
use crate::domain::timer::TimerState;
use crate::domain::transition::{
    derive_session_transitions, SessionLifecycleView, SessionTransition,
};
use crate::errors::domain::DomainError;

use observer::ObserverRegistry;

pub use navigation::Step;
pub use observer::{SessionObserver, SubscriptionId};

/// One game session: a roster, a category, and any number of rounds.
pub struct SessionFlow {
    config: SessionConfig,
    state: SessionState,
    rng: Box<dyn RandomSource + Send>,
    /// Base seed when the session was built deterministically.
    seed: Option<u64>,
    observers: ObserverRegistry,
}

impl SessionFlow {
    /// Build a session around an injected RNG.
    pub fn new(
        config: SessionConfig,
        rng: Box<dyn RandomSource + Send>,
    ) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self {
            state: SessionState::new(config.discussion_seconds),
            config,
            rng,
            seed: None,
            observers: ObserverRegistry::default(),
        })
    }

    /// Deterministic session: every round's roles derive from `seed`.
    pub fn with_seed(config: SessionConfig, seed: u64) -> Result<Self, DomainError> {
        let mut flow = Self::new(config, Box::new(SeededRng::new(derive_round_seed(seed, 1))))?;
        flow.seed = Some(seed);
        Ok(flow)
    }

    /// Non-deterministic session for real play.
    pub fn with_entropy(config: SessionConfig) -> Result<Self, DomainError> {
        Self::new(config, Box::new(SeededRng::from_entropy()))
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn round_no(&self) -> u32 {
        self.state.round_no
    }

    /// Reveal index in RoleReveal, voter index in Voting, `None` otherwise.
    pub fn current_index(&self) -> Option<usize> {
        self.state.turn_index()
    }

    pub fn timer_remaining(&self) -> u32 {
        self.state.timer.remaining()
    }

    pub fn timer_state(&self) -> TimerState {
        self.state.timer.state()
    }

    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    /// Assignments in reveal order.
    pub fn assignments(&self) -> &[RoleAssignment] {
        &self.state.assignments
    }

    pub fn voting_order(&self) -> &[PlayerId] {
        &self.state.voting_order
    }

    pub fn vote_of(&self, voter: PlayerId) -> Option<PlayerId> {
        self.state.votes.vote_of(voter)
    }

    pub fn history(&self) -> &[RoundOutcome] {
        &self.state.history
    }

    /// Player holding the phone right now (RoleReveal and Voting).
    pub fn current_player(&self) -> Option<&Player> {
        match self.state.phase {
            Phase::RoleReveal => {
                let index = self.state.reveal?.current();
                self.state.assignments.get(index).map(|a| &a.player)
            }
            Phase::Voting => {
                let voter = self.current_voter().ok()?;
                self.state.player(voter)
            }
            _ => None,
        }
    }

    /// What the current player sees on the reveal screen.
    pub fn reveal_card(&self) -> Result<RevealCard, DomainError> {
        require_phase(&self.state, Phase::RoleReveal, "reveal_card")?;
        let reveal = require_reveal(&self.state, "reveal_card")?;
        self.state
            .assignments
            .get(reveal.current())
            .map(RevealCard::of)
            .ok_or_else(|| {
                DomainError::validation_other("Invariant violated: reveal index out of range")
            })
    }

    pub fn snapshot(&self) -> Result<SessionSnapshot, DomainError> {
        snapshot(&self.state)
    }

    /// Register an observer; it sees every transition from now on.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: SessionObserver + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn lifecycle(&self) -> SessionLifecycleView {
        SessionLifecycleView::of(&self.state)
    }

    /// Derive transitions since `before`, append explicit ones, and notify.
    fn publish(&mut self, before: SessionLifecycleView, explicit: Vec<SessionTransition>) {
        let after = self.lifecycle();
        let mut transitions = derive_session_transitions(&before, &after);
        transitions.extend(explicit);
        if transitions.is_empty() {
            return;
        }
        for t in &transitions {
            debug!(round_no = self.state.round_no, transition = ?t, "Session transition");
        }
        self.observers.dispatch(&transitions);
    }
}

impl std::fmt::Debug for SessionFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionFlow")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("seed", &self.seed)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
