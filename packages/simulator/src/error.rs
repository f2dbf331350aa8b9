//! Simulator error type.

use impostor_engine::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("engine rejected a move: {0}")]
    Domain(#[from] DomainError),
    #[error("session has no spy")]
    NoSpy,
    #[error("no player holds the phone in {0}")]
    NoCurrentPlayer(&'static str),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}
