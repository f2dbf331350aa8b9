//! Session engine for a pass-and-play "find the impostor" party game.
//!
//! One phone goes around the table: every player privately sees their role,
//! the group discusses against a countdown, then each player names a suspect.
//! [`SessionFlow`] is the only type a UI needs to drive; everything under
//! [`domain`] is pure logic it composes.

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

// Re-exports for public API
pub use config::SessionConfig;
pub use domain::{
    Avatar, Category, CategoryCatalog, InMemoryCatalog, Phase, PhaseSnapshot, Player, PlayerColor,
    PlayerId, RandomSource, RevealCard, RoleAssignment, RoundOutcome, ScriptedRng, SeededRng,
    SessionSnapshot, SessionTransition, TickOutcome, TieBreak, TimerState, VoteTally,
};
pub use errors::domain::{DomainError, NotFoundKind, StateKind, ValidationKind};
pub use services::session_flow::{SessionFlow, SessionObserver, Step, SubscriptionId};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
