//! Services layer: orchestration on top of the pure domain.

pub mod session_flow;

pub use session_flow::{SessionFlow, SessionObserver, Step, SubscriptionId};
