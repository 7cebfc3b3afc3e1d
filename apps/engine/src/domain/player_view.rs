//! What a single seat is allowed to see.

use serde::{Deserialize, Serialize};

use crate::domain::day::legal_vote_targets;
use crate::domain::night::legal_night_targets;
use crate::domain::rules::RoleKind;
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::errors::domain::RosterError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub seat: PlayerId,
    pub name: String,
    /// Own role only. Other players' roles are never exposed here.
    pub role: RoleKind,
    pub alive: bool,
    pub phase: Phase,
    pub round: u32,
    pub living: Vec<PlayerId>,
    /// True when the engine is waiting on this seat.
    pub to_act: bool,
    /// Empty unless `to_act`.
    pub legal_targets: Vec<PlayerId>,
}

pub fn player_view(state: &GameState, seat: PlayerId) -> Result<PlayerView, RosterError> {
    let player = state.roster.player(seat)?;
    let roster = &state.roster;

    let to_act = player.alive
        && match state.phase {
            Phase::Night => state
                .night
                .as_ref()
                .and_then(|n| n.pending_role())
                .and_then(|role| roster.living_holder_of(role))
                == Some(seat),
            Phase::Day => state.day.as_ref().and_then(|d| d.current_voter()) == Some(seat),
            Phase::Setup | Phase::End => false,
        };

    let legal_targets = match (to_act, state.phase) {
        (true, Phase::Night) => legal_night_targets(roster),
        (true, Phase::Day) => legal_vote_targets(roster, seat),
        _ => Vec::new(),
    };

    Ok(PlayerView {
        seat,
        name: player.name.clone(),
        role: player.role,
        alive: player.alive,
        phase: state.phase,
        round: state.round,
        living: roster.living_players(),
        to_act,
        legal_targets,
    })
}
