//! Per-game metrics written by the output writers.

use std::collections::BTreeMap;

use impostor_engine::{PlayerId, SessionConfig};
use serde::Serialize;

use crate::simulator::GameResult;

#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    pub rounds: Vec<RoundMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub players: usize,
    pub category: String,
    pub session: SessionConfig,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub rounds_played: usize,
    pub spies_caught: usize,
    pub catch_rate: f64,
    pub ticks: u32,
    pub transitions: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub spy: PlayerId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    pub leader: Option<PlayerId>,
    pub caught: bool,
}

/// One CSV line per game.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub rounds: usize,
    pub spies_caught: usize,
    pub catch_rate: f64,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(m: &GameMetrics) -> Self {
        Self {
            game_id: m.game_id,
            seed: m.seed,
            rounds: m.result.rounds_played,
            spies_caught: m.result.spies_caught,
            catch_rate: m.result.catch_rate,
        }
    }
}

pub struct GameContext<'a> {
    pub game_id: u32,
    pub seed: u64,
    pub players: usize,
    pub category: &'a str,
    pub session: &'a SessionConfig,
    pub total_games: u32,
}

pub fn build_game_metrics(
    ctx: &GameContext<'_>,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let rounds: Vec<RoundMetrics> = result
        .rounds
        .iter()
        .map(|r| RoundMetrics {
            round_no: r.round_no,
            spy: r.spy,
            word: r.word.clone(),
            leader: r.leader,
            caught: r.caught,
        })
        .collect();

    GameMetrics {
        game_id: ctx.game_id,
        seed: ctx.seed,
        timestamp,
        config: GameConfig {
            players: ctx.players,
            category: ctx.category.to_string(),
            session: ctx.session.clone(),
            total_games: ctx.total_games,
        },
        result: GameResultMetrics {
            rounds_played: rounds.len(),
            spies_caught: result.spies_caught(),
            catch_rate: catch_rate(result.spies_caught(), rounds.len()),
            ticks: result.ticks,
            transitions: result.transitions,
            duration_ms,
        },
        rounds,
    }
}

pub fn catch_rate(caught: usize, rounds: usize) -> f64 {
    if rounds == 0 {
        return 0.0;
    }
    caught as f64 / rounds as f64
}

/// Times each player was the spy and times they were voted out, across games.
#[derive(Debug, Default)]
pub struct SpyStats {
    pub by_player: BTreeMap<PlayerId, (u32, u32)>,
}

impl SpyStats {
    pub fn record(&mut self, result: &GameResult) {
        for round in &result.rounds {
            let entry = self.by_player.entry(round.spy).or_insert((0, 0));
            entry.0 += 1;
            if round.caught {
                entry.1 += 1;
            }
        }
    }
}
