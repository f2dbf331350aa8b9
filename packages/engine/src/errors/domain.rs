//! Domain-level error type used across the engine and its callers.
//!
//! Every fallible engine operation returns `Result<T, DomainError>`. Errors
//! are produced before any state is touched, so a rejected call leaves the
//! session exactly as it was.

use thiserror::Error;

/// Validation error kinds: the caller handed the engine malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidPlayerCount,
    DuplicatePlayer,
    InvalidPlayerId,
    SelfVote,
    UnknownPlayer,
    CategoryLocked,
    InvalidConfig,
    Other(String),
}

/// State error kinds: the operation is not valid in the current phase.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateKind {
    PhaseMismatch,
    VoteMissing,
    OutOfTurn,
    TimerNotStartable,
    NotStarted,
    Other(String),
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Category,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed input, rejected before any mutation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Operation invalid for the current phase
    #[error("state error {0:?}: {1}")]
    State(StateKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn state(kind: StateKind, detail: impl Into<String>) -> Self {
        Self::State(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// True when the error reports a phase/ordering problem rather than bad input.
    pub fn is_state(&self) -> bool {
        matches!(self, DomainError::State(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_detail() {
        let err = DomainError::validation(ValidationKind::SelfVote, "player 2 voted for themself");
        assert_eq!(
            err.to_string(),
            "validation error SelfVote: player 2 voted for themself"
        );

        let err = DomainError::state(StateKind::PhaseMismatch, "not voting");
        assert_eq!(err.to_string(), "state error PhaseMismatch: not voting");
        assert!(err.is_state());
    }

    #[test]
    fn validation_other_keeps_detail() {
        let err = DomainError::validation_other("odd input");
        let kind = ValidationKind::Other("odd input".into());
        assert_eq!(err, DomainError::Validation(kind, "odd input".into()));
        assert!(!err.is_state());
    }
}
