//! Domain layer: pure game rules, no I/O.

pub mod day;
pub mod game_transition;
pub mod night;
pub mod player_view;
pub mod roster;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod win;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_day;
#[cfg(test)]
mod tests_night;
#[cfg(test)]
mod tests_props_day;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use day::{DayRound, VoteTally};
pub use game_transition::{derive_game_transitions, GameTransition};
pub use night::{NightAction, NightOutcome, NightRound};
pub use player_view::PlayerView;
pub use roster::PlayerRoster;
pub use rules::{remaining_roles, validate_complete, RoleCounts, RoleKind, PLAYERS, REQUIRED_ROLES};
pub use snapshot::{GameSnapshot, PhaseSnapshot, Turn};
pub use state::{GameEnding, GameState, Phase, Player, PlayerId};
pub use win::WinOutcome;
