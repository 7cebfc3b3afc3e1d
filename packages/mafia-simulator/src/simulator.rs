//! In-memory game simulator.
//!
//! Drives a `GameController` from setup to its ending, asking the AI in each
//! seat for night targets and votes, and records what happened along the way.

use mafia_engine::ai::{AiError, AiPlayer};
use mafia_engine::domain::PLAYERS;
use mafia_engine::{
    derive_game_transitions, DomainError, GameController, GameEnding, GameTransition, Phase,
    PlayerId, RoleKind,
};
use serde::Serialize;
use tracing::debug;

/// Upper bound on accepted actions per game. A four-player game needs far
/// fewer; hitting it means the engine stopped making progress.
const MAX_STEPS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EliminationCause {
    Night,
    Lynch,
}

#[derive(Debug, Clone, Serialize)]
pub struct Elimination {
    pub round: u32,
    pub seat: PlayerId,
    pub role: RoleKind,
    pub cause: EliminationCause,
}

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub ending: GameEnding,
    /// Round the game ended in
    pub rounds: u32,
    pub eliminations: Vec<Elimination>,
    pub transitions: Vec<GameTransition>,
    pub log: Vec<String>,
}

pub struct Simulator {
    game: GameController,
    roles: [RoleKind; PLAYERS],
    eliminations: Vec<Elimination>,
    transitions: Vec<GameTransition>,
    steps: usize,
}

impl Simulator {
    /// `roles[seat]` is the role given to that seat at setup.
    pub fn new(roles: [RoleKind; PLAYERS]) -> Self {
        Self {
            game: GameController::new(),
            roles,
            eliminations: Vec::new(),
            transitions: Vec::new(),
            steps: 0,
        }
    }

    /// Simulate a complete game with one AI per seat.
    pub fn simulate_game(
        mut self,
        ais: &[Box<dyn AiPlayer>; PLAYERS],
    ) -> Result<GameResult, SimulatorError> {
        let before = self.game.snapshot();
        for (seat, role) in self.roles.into_iter().enumerate() {
            self.game.submit_player(&format!("Player{seat}"), role)?;
        }
        let after = self.game.snapshot();
        self.transitions.extend(derive_game_transitions(&before, &after));

        while self.game.current_phase() != Phase::End {
            if self.steps >= MAX_STEPS {
                return Err(SimulatorError::InvalidState(format!(
                    "game still in {} after {MAX_STEPS} actions",
                    self.game.current_phase()
                )));
            }
            self.steps += 1;

            let before = self.game.snapshot();
            match self.game.current_phase() {
                Phase::Night => self.play_night_action(ais)?,
                Phase::Day => self.play_vote(ais)?,
                phase @ (Phase::Setup | Phase::End) => {
                    return Err(SimulatorError::InvalidState(format!(
                        "unexpected phase {phase}"
                    )))
                }
            }
            let after = self.game.snapshot();
            let transitions = derive_game_transitions(&before, &after);
            self.record(before.phase_kind(), before.round, transitions);
        }

        let ending = self
            .game
            .ending()
            .ok_or_else(|| SimulatorError::InvalidState("ended without an ending".into()))?;

        Ok(GameResult {
            ending,
            rounds: self.game.round(),
            eliminations: self.eliminations,
            transitions: self.transitions,
            log: self.game.game_log().to_vec(),
        })
    }

    fn play_night_action(
        &mut self,
        ais: &[Box<dyn AiPlayer>; PLAYERS],
    ) -> Result<(), SimulatorError> {
        let role = self
            .game
            .current_pending_role()
            .ok_or_else(|| SimulatorError::InvalidState("night without a pending role".into()))?;
        let seat = self
            .game
            .roster()
            .living_holder_of(role)
            .ok_or_else(|| SimulatorError::InvalidState(format!("no living {role}")))?;

        let view = self.game.player_view(seat)?;
        let target = ais[seat as usize]
            .choose_night_target(&view)
            .map_err(|e| SimulatorError::AiError(seat, "night action", e))?;

        debug!(seat, %role, target, "AI night action");
        self.game.submit_night_action(role, target)?;
        Ok(())
    }

    fn play_vote(&mut self, ais: &[Box<dyn AiPlayer>; PLAYERS]) -> Result<(), SimulatorError> {
        let voter = self
            .game
            .current_voter()
            .ok_or_else(|| SimulatorError::InvalidState("day without a current voter".into()))?;

        let view = self.game.player_view(voter)?;
        let target = ais[voter as usize]
            .choose_vote(&view)
            .map_err(|e| SimulatorError::AiError(voter, "vote", e))?;

        debug!(voter, target, "AI vote");
        self.game.submit_vote(voter, target)?;
        Ok(())
    }

    fn record(&mut self, phase: Phase, round: u32, transitions: Vec<GameTransition>) {
        for transition in &transitions {
            if let GameTransition::PlayerEliminated { player_id } = transition {
                let cause = match phase {
                    Phase::Day => EliminationCause::Lynch,
                    _ => EliminationCause::Night,
                };
                self.eliminations.push(Elimination {
                    round,
                    seat: *player_id,
                    role: self.roles[*player_id as usize],
                    cause,
                });
            }
        }
        self.transitions.extend(transitions);
    }
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// AI returned an error
    AiError(PlayerId, &'static str, AiError),
    /// The engine rejected an action
    DomainError(DomainError),
    /// The game stopped making sense
    InvalidState(String),
}

impl From<DomainError> for SimulatorError {
    fn from(err: DomainError) -> Self {
        SimulatorError::DomainError(err)
    }
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::AiError(seat, action, err) => {
                write!(f, "AI error (seat {seat}, {action}): {err}")
            }
            SimulatorError::DomainError(err) => write!(f, "Domain error: {err}"),
            SimulatorError::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
        }
    }
}

impl std::error::Error for SimulatorError {}
