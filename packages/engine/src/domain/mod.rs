//! Domain layer: pure game logic types and helpers.

pub mod category;
pub mod player;
pub mod rng;
pub mod roles;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod timer;
pub mod transition;
pub mod turns;
pub mod votes;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_roles;
#[cfg(test)]
mod tests_props_votes;

// Re-exports for ergonomics
pub use category::{Category, CategoryCatalog, InMemoryCatalog};
pub use player::{Avatar, Player, PlayerColor, PlayerId};
pub use rng::{RandomSource, ScriptedRng, SeededRng};
pub use roles::{assign_roles, RoleAssignment, NO_WORD_SENTINEL};
pub use seed_derivation::{derive_round_seed, derive_voting_seed};
pub use snapshot::{PhaseSnapshot, RevealCard, SessionSnapshot};
pub use state::{Phase, RoundOutcome, SessionState};
pub use timer::{RoundTimer, TickOutcome, TimerState};
pub use transition::SessionTransition;
pub use turns::TurnSequencer;
pub use votes::{TieBreak, VoteBook, VoteTally};
