//! Role-aware AI.
//!
//! - Mafia never targets itself at night.
//! - Doctor always protects itself.
//! - Votes are random among legal targets.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::{PlayerId, RoleKind};

pub struct Strategic {
    rng: Mutex<StdRng>,
}

impl Strategic {
    pub const NAME: &'static str = "Strategic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick_random(&self, options: &[PlayerId]) -> Result<PlayerId, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::InvalidMove("No legal targets available".into()))
    }
}

impl AiPlayer for Strategic {
    fn choose_night_target(&self, view: &PlayerView) -> Result<PlayerId, AiError> {
        match view.role {
            RoleKind::Mafia => {
                let others: Vec<PlayerId> = view
                    .legal_targets
                    .iter()
                    .copied()
                    .filter(|&t| t != view.seat)
                    .collect();
                self.pick_random(&others)
            }
            RoleKind::Doctor if view.legal_targets.contains(&view.seat) => Ok(view.seat),
            RoleKind::Doctor => self.pick_random(&view.legal_targets),
            RoleKind::Civilian => Err(AiError::InvalidMove(
                "Civilians have no night action".into(),
            )),
        }
    }

    fn choose_vote(&self, view: &PlayerView) -> Result<PlayerId, AiError> {
        self.pick_random(&view.legal_targets)
    }
}
