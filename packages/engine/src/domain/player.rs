//! Player records handed to the engine by the setup screen.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Stable player identifier (1-based, unique within a session).
pub type PlayerId = u32;

/// Opaque color token chosen on the setup screen; the engine only compares it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerColor(pub String);

impl PlayerColor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Avatar set offered on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Avatar {
    Detective,
    Agent,
    Chef,
    Pilot,
    Artist,
    Robot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Avatar>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: Avatar) -> Self {
        self.avatar = Some(avatar);
        self
    }
}

/// Check the structural invariants the engine relies on.
///
/// Names and colors are validated upstream by the setup screen; only id
/// uniqueness and the `id >= 1` rule are enforced here.
pub fn validate_roster(players: &[Player]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(players.len());
    for p in players {
        if p.id == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerId,
                "Player ids start at 1",
            ));
        }
        if !seen.insert(p.id) {
            return Err(DomainError::validation(
                ValidationKind::DuplicatePlayer,
                format!("Player id {} appears more than once", p.id),
            ));
        }
    }
    Ok(())
}
