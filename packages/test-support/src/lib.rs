//! Engine test support utilities
//!
//! Shared by the engine's unit tests, its integration tests and the
//! simulator's tests.

pub mod logging;
pub mod roster;
pub mod unique;
