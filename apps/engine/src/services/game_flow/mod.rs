//! Game flow orchestration: the single owner of `GameState`.
//!
//! The presentation layer talks only to [`GameController`]. Each public
//! method either rejects its input and leaves the state alone, or applies it
//! and runs whatever phase transitions follow.

mod player_actions;
mod round_lifecycle;
mod setup;

use crate::domain::day::legal_vote_targets as day_vote_targets;
use crate::domain::night::legal_night_targets as night_targets;
use crate::domain::player_view::{player_view, PlayerView};
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::{
    GameEnding, GameState, Phase, PlayerId, PlayerRoster, RoleKind, WinOutcome,
};
use crate::errors::domain::DomainError;

/// Drives one game from setup to its ending.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    /// A controller already in Setup.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn roster(&self) -> &PlayerRoster {
        &self.state.roster
    }

    pub fn current_phase(&self) -> Phase {
        self.state.phase
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    /// Read-only, append-only event log.
    pub fn game_log(&self) -> &[String] {
        &self.state.event_log
    }

    /// Role expected to act next; `None` outside Night.
    pub fn current_pending_role(&self) -> Option<RoleKind> {
        match self.state.phase {
            Phase::Night => self.state.night.as_ref().and_then(|n| n.pending_role()),
            _ => None,
        }
    }

    /// Player expected to vote next; `None` outside Day.
    pub fn current_voter(&self) -> Option<PlayerId> {
        match self.state.phase {
            Phase::Day => self.state.day.as_ref().and_then(|d| d.current_voter()),
            _ => None,
        }
    }

    /// Terminal win outcome, if the game ended with one. A Doctor save ends
    /// the game without a winner.
    pub fn winner(&self) -> Option<WinOutcome> {
        match self.state.ending {
            Some(GameEnding::Victory(outcome)) => Some(outcome),
            _ => None,
        }
    }

    pub fn ending(&self) -> Option<GameEnding> {
        self.state.ending
    }

    /// Living players; empty outside Night.
    pub fn legal_night_targets(&self) -> Vec<PlayerId> {
        match self.state.phase {
            Phase::Night => night_targets(&self.state.roster),
            _ => Vec::new(),
        }
    }

    /// Living players other than `voter`; empty outside Day.
    pub fn legal_vote_targets(&self, voter: PlayerId) -> Vec<PlayerId> {
        match self.state.phase {
            Phase::Day => day_vote_targets(&self.state.roster, voter),
            _ => Vec::new(),
        }
    }

    pub fn player_view(&self, seat: PlayerId) -> Result<PlayerView, DomainError> {
        Ok(player_view(&self.state, seat)?)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        snapshot(&self.state)
    }
}
