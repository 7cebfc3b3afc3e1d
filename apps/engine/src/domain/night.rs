use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::roster::PlayerRoster;
use crate::domain::rules::RoleKind;
use crate::domain::state::PlayerId;
use crate::errors::domain::{ActionError, DomainError, RosterError};

/// Targets recorded so far this night.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct NightAction {
    pub kill_target: Option<PlayerId>,
    pub save_target: Option<PlayerId>,
}

/// Result of resolving a night.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum NightOutcome {
    /// The Doctor protected the Mafia's target. Ends the game.
    Saved(PlayerId),
    /// The Mafia's target dies.
    Killed(PlayerId),
}

/// Per-night state: which roles still have to act and what they chose.
#[derive(Debug, Clone)]
pub struct NightRound {
    pending: VecDeque<RoleKind>,
    action: NightAction,
}

impl NightRound {
    /// Queue the night roles in order, skipping any whose holder is dead.
    pub fn start(roster: &PlayerRoster) -> Self {
        let pending = RoleKind::NIGHT_ORDER
            .into_iter()
            .filter(|&role| roster.living_holder_of(role).is_some())
            .collect();
        Self {
            pending,
            action: NightAction::default(),
        }
    }

    /// Role expected to act next, if any.
    pub fn pending_role(&self) -> Option<RoleKind> {
        self.pending.front().copied()
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn action(&self) -> NightAction {
        self.action
    }
}

/// Anyone alive may be targeted, including the actor.
pub fn legal_night_targets(roster: &PlayerRoster) -> Vec<PlayerId> {
    roster.living_players()
}

/// Record the action of the role at the head of the queue.
///
/// Rejections leave `night` untouched.
pub fn record_action(
    night: &mut NightRound,
    roster: &PlayerRoster,
    role: RoleKind,
    target: PlayerId,
) -> Result<(), ActionError> {
    if !role.has_night_action() {
        return Err(ActionError::UnknownRole(role));
    }
    let expected = night.pending_role();
    if expected != Some(role) {
        return Err(ActionError::OutOfTurn {
            expected,
            got: role,
        });
    }
    if !roster.is_alive(target) {
        return Err(ActionError::InvalidTarget(target));
    }

    match role {
        RoleKind::Mafia => night.action.kill_target = Some(target),
        RoleKind::Doctor => night.action.save_target = Some(target),
        RoleKind::Civilian => return Err(ActionError::UnknownRole(role)),
    }
    night.pending.pop_front();
    Ok(())
}

/// Saved when the save lands on the kill target, Killed otherwise.
pub fn resolve(kill_target: PlayerId, save_target: Option<PlayerId>) -> NightOutcome {
    if save_target == Some(kill_target) {
        NightOutcome::Saved(kill_target)
    } else {
        NightOutcome::Killed(kill_target)
    }
}

/// Resolve a night whose queue has drained.
pub fn resolve_round(night: &NightRound) -> Result<NightOutcome, DomainError> {
    if !night.is_complete() {
        return Err(DomainError::invariant(
            "night resolved before every role acted",
        ));
    }
    let kill_target = night
        .action
        .kill_target
        .ok_or_else(|| DomainError::invariant("night resolved without a kill target"))?;
    Ok(resolve(kill_target, night.action.save_target))
}

/// Apply the outcome to the roster. A save changes nothing.
pub fn apply_outcome(roster: &mut PlayerRoster, outcome: NightOutcome) -> Result<(), RosterError> {
    match outcome {
        NightOutcome::Saved(_) => Ok(()),
        NightOutcome::Killed(target) => roster.eliminate(target),
    }
}
