//! Error handling for the Mafia rules engine.

pub mod domain;

pub use domain::{ActionError, DomainError, RosterError, SetupError, VoteError};
