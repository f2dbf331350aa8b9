use tracing::{debug, info};

use super::SessionFlow;
use crate::domain::category::Category;
use crate::domain::player::Player;
use crate::domain::rng::SeededRng;
use crate::domain::roles::{assign_roles, RoleAssignment};
use crate::domain::seed_derivation::derive_round_seed;
use crate::domain::state::{require_category, require_phase, Phase, RoundOutcome};
use crate::domain::transition::SessionTransition;
use crate::domain::turns::TurnSequencer;
use crate::errors::domain::DomainError;

impl SessionFlow {
    /// Lock in players and category and deal the first round's roles.
    ///
    /// Setup only. On success the session is in RoleReveal at index 0.
    pub fn start(&mut self, players: Vec<Player>, category: Category) -> Result<(), DomainError> {
        require_phase(&self.state, Phase::Setup, "start")?;
        self.config.check_player_count(players.len())?;

        let before = self.lifecycle();
        let assignments = assign_roles(&players, &category, &mut *self.rng)?;
        let reveal = TurnSequencer::new(assignments.len())?;

        info!(
            players = players.len(),
            category = %category.id,
            "Starting session"
        );

        self.state.players = players;
        self.state.category = Some(category);
        self.begin_round(1, assignments, reveal);
        self.publish(before, Vec::new());
        Ok(())
    }

    /// Deal a fresh round with the same players and category.
    ///
    /// Results only. Round history is kept.
    pub fn restart(&mut self) -> Result<(), DomainError> {
        require_phase(&self.state, Phase::Results, "restart")?;
        let category = require_category(&self.state, "restart")?.clone();
        let next_round = self.state.round_no + 1;

        let before = self.lifecycle();
        let assignments = match self.seed {
            Some(seed) => {
                let mut rng = SeededRng::new(derive_round_seed(seed, next_round));
                let assignments = assign_roles(&self.state.players, &category, &mut rng)?;
                self.rng = Box::new(rng);
                assignments
            }
            None => assign_roles(&self.state.players, &category, &mut *self.rng)?,
        };
        let reveal = TurnSequencer::new(assignments.len())?;

        info!(round_no = next_round, "Restarting session with new roles");

        self.begin_round(next_round, assignments, reveal);
        self.publish(before, Vec::new());
        Ok(())
    }

    /// Leave the session and return to category selection.
    ///
    /// Allowed from any phase (quitting mid-round included). Observers get a
    /// final `PhaseChanged { to: Setup }`; the finished rounds are handed back.
    pub fn exit_to_selection(mut self) -> Vec<RoundOutcome> {
        let from = self.state.phase;
        info!(
            round_no = self.state.round_no,
            rounds_played = self.state.history.len(),
            ?from,
            "Exiting to category selection"
        );
        if from != Phase::Setup {
            self.observers.dispatch(&[SessionTransition::PhaseChanged {
                from,
                to: Phase::Setup,
            }]);
        }
        std::mem::take(&mut self.state.history)
    }

    fn begin_round(
        &mut self,
        round_no: u32,
        assignments: Vec<RoleAssignment>,
        reveal: TurnSequencer,
    ) {
        debug!(round_no, players = assignments.len(), "Beginning round");
        self.state.round_no = round_no;
        self.state.assignments = assignments;
        self.state.reveal = Some(reveal);
        self.state.voting_order.clear();
        self.state.voting = None;
        self.state.votes.clear();
        self.state.tally = None;
        self.state.timer.reset(self.config.discussion_seconds);
        self.state.phase = Phase::RoleReveal;
    }
}
