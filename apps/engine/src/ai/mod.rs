//! Automated players.
//!
//! - `AiPlayer` trait: pick a night target or a vote from a `PlayerView`
//! - `RandomPlayer`: uniform over legal targets (seedable for tests)
//! - `Strategic`: simple role-aware choices
//! - registry of named factories used by the simulator

mod config;
mod random;
pub mod registry;
mod strategic;
mod trait_def;

pub use config::AiConfig;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory};
use serde_json::Value as JsonValue;
pub use strategic::Strategic;
pub use trait_def::{AiError, AiPlayer};

/// Create an AI player by registered name and optional JSON config.
///
/// Returns None if `ai_type` is not registered.
pub fn create_ai(ai_type: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    let seed = AiConfig::from_json(config).seed();
    by_name(ai_type).map(|factory| (factory.make)(seed))
}
