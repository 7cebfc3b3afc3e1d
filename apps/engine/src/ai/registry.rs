//! How to register an AI
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add an `AiFactory` entry to the static list with a stable `name` and `version`.
//! 3) Same seed, same behavior.

use crate::ai::{AiPlayer, RandomPlayer, Strategic};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    AiFactory {
        name: Strategic::NAME,
        version: Strategic::VERSION,
        make: make_strategic,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

fn make_random_player(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(RandomPlayer::new(seed))
}

fn make_strategic(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(Strategic::new(seed))
}
