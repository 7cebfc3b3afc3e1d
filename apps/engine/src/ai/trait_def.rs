//! AI player trait definition.

use std::fmt;

use crate::domain::player_view::PlayerView;
use crate::domain::PlayerId;

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI was asked to act with nothing legal to choose
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// Trait for AI players.
///
/// Implementations receive the view of one seat and must choose among
/// `view.legal_targets`, which is only populated while that seat is to act.
pub trait AiPlayer: Send + Sync {
    /// Choose a night target for the seat's role (kill for Mafia, save for
    /// Doctor).
    fn choose_night_target(&self, view: &PlayerView) -> Result<PlayerId, AiError>;

    /// Choose who to vote for during the day.
    fn choose_vote(&self, view: &PlayerView) -> Result<PlayerId, AiError>;
}
