//! In-memory session simulator.
//!
//! Drives a [`SessionFlow`] through whole games the way a table of players
//! would: everyone peeks at their card, the host lets the timer run out,
//! and each player names a suspect.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use impostor_engine::{
    Category, Phase, Player, PlayerId, RoundOutcome, SessionConfig, SessionFlow, SessionTransition,
    Step, TimerState,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::SimulatorError;

/// How simulated players choose a suspect.
#[derive(Debug, Clone, Copy)]
pub struct VoterProfile {
    /// Chance a citizen names the actual spy; otherwise a random other player.
    pub accuracy: f64,
    /// Chance a voter hands the phone on without voting.
    pub abstain_rate: f64,
}

impl Default for VoterProfile {
    fn default() -> Self {
        Self {
            accuracy: 0.5,
            abstain_rate: 0.0,
        }
    }
}

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub rounds: Vec<RoundOutcome>,
    /// Total timer ticks pumped across all rounds.
    pub ticks: u32,
    /// Notifications seen by the simulator's observer.
    pub transitions: usize,
}

impl GameResult {
    pub fn spies_caught(&self) -> usize {
        self.rounds.iter().filter(|r| r.caught).count()
    }
}

pub struct Simulator {
    flow: SessionFlow,
    voters: StdRng,
    profile: VoterProfile,
    transitions: Arc<AtomicUsize>,
}

impl Simulator {
    /// Seeded simulators replay identically: the engine and the simulated
    /// voters draw from independent streams derived from `seed`.
    pub fn new(
        config: SessionConfig,
        profile: VoterProfile,
        seed: u64,
    ) -> Result<Self, SimulatorError> {
        let mut flow = SessionFlow::with_seed(config, seed)?;
        let transitions = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&transitions);
        flow.subscribe(move |t: &SessionTransition| {
            counter.fetch_add(1, Ordering::Relaxed);
            debug!(?t, "transition");
        });

        Ok(Self {
            flow,
            voters: StdRng::seed_from_u64(seed.wrapping_mul(31).wrapping_add(7)),
            profile,
            transitions,
        })
    }

    pub fn simulate_game(
        mut self,
        players: Vec<Player>,
        category: Category,
        rounds: u32,
    ) -> Result<GameResult, SimulatorError> {
        self.flow.start(players, category)?;
        let mut ticks = 0;

        for round in 1..=rounds {
            if round > 1 {
                self.flow.restart()?;
            }
            self.play_reveal()?;
            ticks += self.play_discussion()?;
            self.play_voting()?;
        }

        let transitions = Arc::clone(&self.transitions);
        let rounds = self.flow.exit_to_selection();
        Ok(GameResult {
            rounds,
            ticks,
            transitions: transitions.load(Ordering::Relaxed),
        })
    }

    fn play_reveal(&mut self) -> Result<(), SimulatorError> {
        loop {
            let card = self.flow.reveal_card()?;
            debug!(?card, "card seen");
            if self.flow.advance()? == Step::Entered(Phase::Discussion) {
                return Ok(());
            }
        }
    }

    /// Let the countdown run out, then open voting unless the engine already did.
    fn play_discussion(&mut self) -> Result<u32, SimulatorError> {
        self.flow.start_timer()?;
        let mut ticks = 0;
        while self.flow.phase() == Phase::Discussion
            && self.flow.timer_state() == TimerState::Running
        {
            self.flow.tick()?;
            ticks += 1;
        }
        if self.flow.phase() == Phase::Discussion {
            self.flow.begin_voting()?;
        }
        Ok(ticks)
    }

    fn play_voting(&mut self) -> Result<(), SimulatorError> {
        let spy = self
            .flow
            .assignments()
            .iter()
            .find(|a| a.is_spy)
            .map(|a| a.player.id)
            .ok_or(SimulatorError::NoSpy)?;
        let ids: Vec<PlayerId> = self.flow.players().iter().map(|p| p.id).collect();

        loop {
            let voter = self
                .flow
                .current_player()
                .map(|p| p.id)
                .ok_or(SimulatorError::NoCurrentPlayer("voting"))?;
            if let Some(votee) = self.choose(voter, spy, &ids) {
                self.flow.vote(votee)?;
            }
            if self.flow.advance()? == Step::Entered(Phase::Results) {
                return Ok(());
            }
        }
    }

    fn choose(&mut self, voter: PlayerId, spy: PlayerId, ids: &[PlayerId]) -> Option<PlayerId> {
        if self.flow.config().allow_abstain && self.chance(self.profile.abstain_rate) {
            return None;
        }
        if voter != spy && self.chance(self.profile.accuracy) {
            return Some(spy);
        }
        let others: Vec<PlayerId> = ids.iter().copied().filter(|&id| id != voter).collect();
        if others.is_empty() {
            return None;
        }
        Some(others[self.voters.random_range(0..others.len())])
    }

    fn chance(&mut self, p: f64) -> bool {
        self.voters.random_bool(p.clamp(0.0, 1.0))
    }
}
