//! Random AI player: picks uniformly among legal targets.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::PlayerId;

/// AI that makes random legal moves.
///
/// Uses `Mutex<StdRng>` because trait methods take `&self`. With a seed the
/// sequence of choices is reproducible.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` for reproducible play, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick(&self, options: &[PlayerId], what: &str) -> Result<PlayerId, AiError> {
        if options.is_empty() {
            return Err(AiError::InvalidMove(format!("No legal {what} available")));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal(format!("Failed to choose random {what}")))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_night_target(&self, view: &PlayerView) -> Result<PlayerId, AiError> {
        self.pick(&view.legal_targets, "night targets")
    }

    fn choose_vote(&self, view: &PlayerView) -> Result<PlayerId, AiError> {
        self.pick(&view.legal_targets, "vote targets")
    }
}
