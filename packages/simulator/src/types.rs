//! Shared types for the simulator.

use clap::ValueEnum;
use impostor_engine::TieBreak;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TieBreakArg {
    First,
    Random,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::First => TieBreak::FirstInOrder,
            TieBreakArg::Random => TieBreak::Random,
        }
    }
}
