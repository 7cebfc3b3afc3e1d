//! Domain-level error types.
//!
//! Every variant is a local validation failure meant to be shown to whoever
//! supplied the input so they can try again. A call that returns one of these
//! leaves the game state exactly as it was.

use thiserror::Error;

use crate::domain::rules::RoleKind;
use crate::domain::state::{Phase, PlayerId};

/// Rejections while collecting the four (name, role) pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("name {0:?} is already taken")]
    DuplicateName(String),
    #[error("role {role} is already fully assigned (limit {limit})")]
    RoleLimitExceeded { role: RoleKind, limit: u8 },
    #[error("players can only be added during setup (phase is {0})")]
    PhaseMismatch(Phase),
}

/// Rejections of a night action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{0} has no night action")]
    UnknownRole(RoleKind),
    #[error("player {0} is not a living target")]
    InvalidTarget(PlayerId),
    #[error("out of turn: expected {expected:?} to act, got {got}")]
    OutOfTurn {
        expected: Option<RoleKind>,
        got: RoleKind,
    },
    #[error("night actions are only accepted at night (phase is {0})")]
    PhaseMismatch(Phase),
}

/// Rejections of a day vote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    #[error("player {0} cannot vote for themselves")]
    SelfVote(PlayerId),
    #[error("player {0} is not a living target")]
    InvalidTarget(PlayerId),
    #[error("player {0} has already voted this round")]
    VoterAlreadyVoted(PlayerId),
    #[error("not player {got}'s turn to vote (expected {expected:?})")]
    NotVotersTurn {
        expected: Option<PlayerId>,
        got: PlayerId,
    },
    #[error("player {0} is not a voter this round")]
    InvalidVoter(PlayerId),
    #[error("votes are only accepted during the day (phase is {0})")]
    PhaseMismatch(Phase),
}

/// Roster lookups and eliminations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("player {0} is already dead")]
    AlreadyDead(PlayerId),
    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),
}

/// Central domain error type returned by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("setup: {0}")]
    Setup(#[from] SetupError),
    #[error("night action: {0}")]
    Action(#[from] ActionError),
    #[error("vote: {0}")]
    Vote(#[from] VoteError),
    #[error("roster: {0}")]
    Roster(#[from] RosterError),
    #[error("restart is only possible once the game has ended (phase is {0})")]
    NotEnded(Phase),
    /// Broken internal invariant; indicates a bug rather than bad input.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }
}
