use tracing::{debug, info};

use super::GameController;
use crate::domain::rules::{remaining_roles, validate_complete, RoleKind};
use crate::domain::{GameState, Phase, PlayerId};
use crate::errors::domain::{DomainError, SetupError};

impl GameController {
    /// Throw away whatever was in progress and begin collecting players.
    pub fn start_setup(&mut self) {
        self.state = GameState::new();
        debug!("Setup started");
    }

    /// Add one (name, role) pair. The fourth valid pair starts Night 1.
    pub fn submit_player(&mut self, name: &str, role: RoleKind) -> Result<PlayerId, DomainError> {
        if self.state.phase != Phase::Setup {
            return Err(SetupError::PhaseMismatch(self.state.phase).into());
        }

        let id = self.state.roster.add_player(name, role)?;
        debug!(player = id, %role, "Player added");

        if self.is_setup_complete() {
            self.finalize_setup();
        }
        Ok(id)
    }

    /// True once the roster holds exactly the required line-up.
    pub fn is_setup_complete(&self) -> bool {
        validate_complete(&self.state.roster.role_counts())
    }

    /// Roles a new player may still pick; empty outside Setup.
    pub fn remaining_roles(&self) -> Vec<RoleKind> {
        match self.state.phase {
            Phase::Setup => remaining_roles(&self.state.roster.role_counts()),
            _ => Vec::new(),
        }
    }

    fn finalize_setup(&mut self) {
        let total = self.state.roster.len();
        self.state.round = 1;
        self.state.log(format!("Game Started with {total} players."));
        self.state.log("--- Assigned Roles (Hidden until End) ---");
        let reveal: Vec<String> = self
            .state
            .roster
            .players()
            .iter()
            .map(|p| format!("{} → {}", p.name, p.role))
            .collect();
        self.state.event_log.extend(reveal);

        info!(players = total, "Game started");
        self.start_night();
    }
}
