use tracing::debug;

use super::GameController;
use crate::domain::night::{self, NightOutcome};
use crate::domain::rules::RoleKind;
use crate::domain::state::{require_day, require_night};
use crate::domain::{day, Phase, PlayerId};
use crate::errors::domain::{ActionError, DomainError, VoteError};

impl GameController {
    /// Record a night action for the role whose turn it is.
    ///
    /// Returns `Ok(None)` while another role still has to act and
    /// `Ok(Some(outcome))` once the night resolves.
    pub fn submit_night_action(
        &mut self,
        role: RoleKind,
        target: PlayerId,
    ) -> Result<Option<NightOutcome>, DomainError> {
        if self.state.phase != Phase::Night {
            return Err(ActionError::PhaseMismatch(self.state.phase).into());
        }

        let round = require_night(&mut self.state.night, "submit_night_action")?;
        night::record_action(round, &self.state.roster, role, target)?;
        debug!(%role, target, "Night action recorded");

        if !round.is_complete() {
            return Ok(None);
        }
        let outcome = night::resolve_round(round)?;
        self.state.night = None;
        self.apply_night_outcome(outcome)?;
        Ok(Some(outcome))
    }

    /// Record a vote from the player whose turn it is.
    ///
    /// Returns `Ok(Some(lynched))` on the vote that completes the round.
    pub fn submit_vote(
        &mut self,
        voter: PlayerId,
        target: PlayerId,
    ) -> Result<Option<PlayerId>, DomainError> {
        if self.state.phase != Phase::Day {
            return Err(VoteError::PhaseMismatch(self.state.phase).into());
        }

        let round = require_day(&mut self.state.day, "submit_vote")?;
        day::cast_vote(round, &self.state.roster, voter, target)?;
        debug!(voter, target, "Vote cast");

        if !round.is_complete() {
            return Ok(None);
        }
        let lynched = day::resolve_round(round)?;
        self.state.day = None;
        self.apply_lynch(lynched)?;
        Ok(Some(lynched))
    }
}
