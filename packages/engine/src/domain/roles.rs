//! Role assignment: who is the spy, and what word everyone else sees.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::category::Category;
use crate::domain::player::{validate_roster, Player, PlayerId};
use crate::domain::rng::{pick, shuffle, RandomSource};
use crate::errors::domain::{DomainError, ValidationKind};

/// Word handed out when a category has no items; a session must never crash
/// because a catalog entry is empty.
pub const NO_WORD_SENTINEL: &str = "???";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub player: Player,
    pub is_spy: bool,
    /// Secret word; `None` for the spy.
    pub word: Option<String>,
    /// Spy-only hint; `None` for everyone else or when the category has none.
    pub hint: Option<String>,
}

impl RoleAssignment {
    pub fn player_id(&self) -> PlayerId {
        self.player.id
    }
}

/// Assign roles for one round.
///
/// The returned list is the reveal order: a uniform shuffle of `players`.
/// Exactly one entry is the spy; every other entry carries the same word.
/// Input order and contents are left untouched.
pub fn assign_roles(
    players: &[Player],
    category: &Category,
    rng: &mut dyn RandomSource,
) -> Result<Vec<RoleAssignment>, DomainError> {
    if players.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            "At least one player is required",
        ));
    }
    validate_roster(players)?;

    let mut order: Vec<Player> = players.to_vec();
    shuffle(&mut order, rng);

    let spy_index = rng.next_index(order.len());
    let word = pick(&category.items, rng)
        .cloned()
        .unwrap_or_else(|| NO_WORD_SENTINEL.to_string());
    let hint = pick(&category.hints, rng).cloned();

    debug!(
        players = order.len(),
        category = %category.id,
        spy_index,
        "Assigned roles"
    );

    let assignments = order
        .into_iter()
        .enumerate()
        .map(|(i, player)| {
            let is_spy = i == spy_index;
            RoleAssignment {
                player,
                is_spy,
                word: (!is_spy).then(|| word.clone()),
                hint: if is_spy { hint.clone() } else { None },
            }
        })
        .collect();

    Ok(assignments)
}

/// The spy's entry. Assignments built by [`assign_roles`] always have one.
pub fn find_spy(assignments: &[RoleAssignment]) -> Option<&RoleAssignment> {
    assignments.iter().find(|a| a.is_spy)
}

/// The shared secret word (from any non-spy entry).
pub fn secret_word(assignments: &[RoleAssignment]) -> Option<&str> {
    assignments.iter().find_map(|a| a.word.as_deref())
}
