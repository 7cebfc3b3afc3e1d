#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod domain;
pub mod errors;
pub mod services;

// Re-exports for public API
pub use domain::{
    derive_game_transitions, GameEnding, GameSnapshot, GameTransition, NightOutcome, Phase,
    PlayerId, PlayerView, RoleKind, WinOutcome,
};
pub use errors::{ActionError, DomainError, RosterError, SetupError, VoteError};
pub use services::game_flow::GameController;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
