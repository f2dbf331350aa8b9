//! Linear cursor over an ordered list of players (reveal order or voting order).
//!
//! The sequencer never wraps: the orchestrator decides what "advancing past the
//! last player" means for the current phase.

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSequencer {
    len: usize,
    index: usize,
}

impl TurnSequencer {
    pub fn new(len: usize) -> Result<Self, DomainError> {
        if len == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                "Turn sequence needs at least one player",
            ));
        }
        Ok(Self { len, index: 0 })
    }

    /// Current index, always in `0..len`.
    #[inline]
    pub fn current(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }

    /// Step forward; `false` (and no change) when already on the last index.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Step back; `false` (and no change) when already on index 0.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }
}
