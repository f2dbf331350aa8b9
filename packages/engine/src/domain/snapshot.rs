//! Public snapshot API for rendering a session without exposing internals.

use serde::Serialize;

use crate::domain::player::{Player, PlayerId};
use crate::domain::roles::{secret_word, RoleAssignment};
use crate::domain::state::{
    require_reveal, require_spy, require_voting, Phase, RoundOutcome, SessionState,
};
use crate::domain::timer::TimerState;
use crate::domain::votes::VoteTally;
use crate::errors::domain::DomainError;

/// What the player holding the phone sees on the reveal screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RevealCard {
    Citizen { word: String },
    Spy { hint: Option<String> },
}

impl RevealCard {
    pub fn of(assignment: &RoleAssignment) -> Self {
        match (&assignment.word, assignment.is_spy) {
            (Some(word), false) => RevealCard::Citizen { word: word.clone() },
            _ => RevealCard::Spy {
                hint: assignment.hint.clone(),
            },
        }
    }
}

/// Session-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionHeader {
    pub round_no: u32,
    pub category_id: Option<String>,
    pub players: Vec<Player>,
    pub rounds_played: usize,
}

/// Top-level snapshot combining header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub session: SessionHeader,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "phase", content = "data", rename_all = "snake_case")]
pub enum PhaseSnapshot {
    Setup,
    RoleReveal(RevealSnapshot),
    Discussion(DiscussionSnapshot),
    Voting(VotingSnapshot),
    Results(ResultsSnapshot),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RevealSnapshot {
    pub index: usize,
    pub count: usize,
    pub player: Player,
    pub card: RevealCard,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiscussionSnapshot {
    pub remaining: u32,
    pub duration: u32,
    pub timer: TimerState,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VotingSnapshot {
    pub index: usize,
    pub count: usize,
    pub voter: PlayerId,
    /// Everyone the current voter may name (all players but themself).
    pub candidates: Vec<PlayerId>,
    pub current_vote: Option<PlayerId>,
    pub votes_cast: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultsSnapshot {
    pub tally: VoteTally,
    pub spy: PlayerId,
    pub word: Option<String>,
    pub outcome: Option<RoundOutcome>,
}

/// Build a snapshot of the whole session.
pub fn snapshot(state: &SessionState) -> Result<SessionSnapshot, DomainError> {
    let session = SessionHeader {
        round_no: state.round_no,
        category_id: state.category.as_ref().map(|c| c.id.clone()),
        players: state.players.clone(),
        rounds_played: state.history.len(),
    };

    let phase = match state.phase {
        Phase::Setup => PhaseSnapshot::Setup,
        Phase::RoleReveal => {
            let reveal = require_reveal(state, "snapshot")?;
            let assignment = state.assignments.get(reveal.current()).ok_or_else(|| {
                DomainError::validation_other("Invariant violated: reveal index out of range")
            })?;
            PhaseSnapshot::RoleReveal(RevealSnapshot {
                index: reveal.current(),
                count: reveal.len(),
                player: assignment.player.clone(),
                card: RevealCard::of(assignment),
            })
        }
        Phase::Discussion => PhaseSnapshot::Discussion(DiscussionSnapshot {
            remaining: state.timer.remaining(),
            duration: state.timer.duration(),
            timer: state.timer.state(),
        }),
        Phase::Voting => {
            let voting = require_voting(state, "snapshot")?;
            let voter = state
                .voting_order
                .get(voting.current())
                .copied()
                .ok_or_else(|| {
                    DomainError::validation_other("Invariant violated: voter index out of range")
                })?;
            PhaseSnapshot::Voting(VotingSnapshot {
                index: voting.current(),
                count: voting.len(),
                voter,
                candidates: state
                    .players
                    .iter()
                    .map(|p| p.id)
                    .filter(|&id| id != voter)
                    .collect(),
                current_vote: state.votes.vote_of(voter),
                votes_cast: state.votes.len(),
            })
        }
        Phase::Results => {
            let tally = state.tally.clone().ok_or_else(|| {
                DomainError::validation_other("Invariant violated: tally must be set in Results")
            })?;
            PhaseSnapshot::Results(ResultsSnapshot {
                tally,
                spy: require_spy(state, "snapshot")?,
                word: secret_word(&state.assignments).map(str::to_string),
                outcome: state.history.last().cloned(),
            })
        }
    };

    Ok(SessionSnapshot { session, phase })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::PlayerColor;

    fn assignment(is_spy: bool) -> RoleAssignment {
        RoleAssignment {
            player: Player::new(1, "A", PlayerColor::new("red")),
            is_spy,
            word: (!is_spy).then(|| "Pizza".to_string()),
            hint: is_spy.then(|| "Food".to_string()),
        }
    }

    #[test]
    fn reveal_card_for_citizen_and_spy() {
        assert_eq!(
            RevealCard::of(&assignment(false)),
            RevealCard::Citizen {
                word: "Pizza".into()
            }
        );
        assert_eq!(
            RevealCard::of(&assignment(true)),
            RevealCard::Spy {
                hint: Some("Food".into())
            }
        );
    }

    #[test]
    fn setup_snapshot_serializes_tagged() {
        let state = SessionState::new(30);
        let snap = snapshot(&state).unwrap();
        assert_eq!(snap.phase, PhaseSnapshot::Setup);
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["phase"]["phase"], "setup");
        assert_eq!(json["session"]["round_no"], 0);
    }

    #[test]
    fn spy_card_serializes_role_tag() {
        let json = serde_json::to_value(RevealCard::of(&assignment(true))).unwrap();
        assert_eq!(json["role"], "spy");
        assert_eq!(json["hint"], "Food");
    }
}
