//! Session configuration.
//!
//! Provides a typed view over the JSON blob the host app keeps in its
//! preferences. Missing fields fall back to defaults; unknown fields are
//! ignored so older builds can read newer preference files.
//!
//! # Example JSON Config
//!
//! ```json
//! {
//!   "min_players": 3,
//!   "discussion_seconds": 180,
//!   "auto_advance_on_expiry": true,
//!   "tie_break": "first_in_order"
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::domain::votes::TieBreak;
use crate::errors::domain::{DomainError, ValidationKind};

pub const DEFAULT_MIN_PLAYERS: usize = 3;
pub const DEFAULT_MAX_PLAYERS: usize = 20;
pub const DEFAULT_DISCUSSION_SECONDS: u32 = 180;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fewest players a session may start with.
    pub min_players: usize,

    /// Most players a session may start with.
    pub max_players: usize,

    /// Discussion countdown length.
    pub discussion_seconds: u32,

    /// Move straight to voting when the discussion timer expires.
    ///
    /// - `true`: the expiring `tick` also transitions to Voting
    /// - `false` (default): stay in Discussion until `begin_voting`
    pub auto_advance_on_expiry: bool,

    /// Leader selection when the top vote count is shared.
    pub tie_break: TieBreak,

    /// Draw a fresh voting order instead of reusing the reveal order.
    pub reshuffle_voting_order: bool,

    /// Let a voter pass the phone on without naming anyone.
    pub allow_abstain: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_players: DEFAULT_MIN_PLAYERS,
            max_players: DEFAULT_MAX_PLAYERS,
            discussion_seconds: DEFAULT_DISCUSSION_SECONDS,
            auto_advance_on_expiry: false,
            tie_break: TieBreak::FirstInOrder,
            reshuffle_voting_order: false,
            allow_abstain: true,
        }
    }
}

impl SessionConfig {
    /// Build from an optional JSON value, falling back to defaults on a
    /// missing or malformed value.
    pub fn from_json(json: Option<&JsonValue>) -> Self {
        match json {
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                warn!(error = %e, "Malformed session config, using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn with_discussion_seconds(mut self, seconds: u32) -> Self {
        self.discussion_seconds = seconds;
        self
    }

    pub fn with_auto_advance(mut self, enabled: bool) -> Self {
        self.auto_advance_on_expiry = enabled;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players;
        self
    }

    pub fn with_reshuffled_voting(mut self, enabled: bool) -> Self {
        self.reshuffle_voting_order = enabled;
        self
    }

    pub fn with_abstain(mut self, allowed: bool) -> Self {
        self.allow_abstain = allowed;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.min_players == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                "min_players must be at least 1",
            ));
        }
        if self.max_players < self.min_players {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!(
                    "max_players ({}) is below min_players ({})",
                    self.max_players, self.min_players
                ),
            ));
        }
        Ok(())
    }

    /// Player count check used by the orchestrator before assigning roles.
    pub fn check_player_count(&self, count: usize) -> Result<(), DomainError> {
        if count < self.min_players || count > self.max_players {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!(
                    "Need {}..={} players, got {count}",
                    self.min_players, self.max_players
                ),
            ));
        }
        Ok(())
    }
}
