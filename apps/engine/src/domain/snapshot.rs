//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{remaining_roles, RoleKind};
use crate::domain::state::{GameEnding, GameState, Phase, PlayerId};

/// Public info about a single player. Roles stay hidden until the game ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub name: String,
    pub alive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleKind>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupSnapshot {
    pub seats_filled: usize,
    pub remaining_roles: Vec<RoleKind>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightSnapshot {
    pub pending_role: Option<RoleKind>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub current_voter: Option<PlayerId>,
    pub voters: Vec<PlayerId>,
    pub votes_cast: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndSnapshot {
    pub ending: Option<GameEnding>,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Setup(SetupSnapshot),
    Night(NightSnapshot),
    Day(DaySnapshot),
    End(EndSnapshot),
}

/// Whose move it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    NightRole(RoleKind),
    Voter(PlayerId),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round: u32,
    pub players: Vec<PlayerPublic>,
    pub phase: PhaseSnapshot,
    pub log_len: usize,
}

impl GameSnapshot {
    pub fn phase_kind(&self) -> Phase {
        match self.phase {
            PhaseSnapshot::Setup(_) => Phase::Setup,
            PhaseSnapshot::Night(_) => Phase::Night,
            PhaseSnapshot::Day(_) => Phase::Day,
            PhaseSnapshot::End(_) => Phase::End,
        }
    }

    pub fn turn(&self) -> Option<Turn> {
        match &self.phase {
            PhaseSnapshot::Night(n) => n.pending_role.map(Turn::NightRole),
            PhaseSnapshot::Day(d) => d.current_voter.map(Turn::Voter),
            PhaseSnapshot::Setup(_) | PhaseSnapshot::End(_) => None,
        }
    }

    pub fn is_alive(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id && p.alive)
    }
}

pub fn snapshot(state: &GameState) -> GameSnapshot {
    let reveal_roles = state.phase == Phase::End;
    let players = state
        .roster
        .players()
        .iter()
        .enumerate()
        .map(|(i, p)| PlayerPublic {
            id: i as PlayerId,
            name: p.name.clone(),
            alive: p.alive,
            role: reveal_roles.then_some(p.role),
        })
        .collect();

    let phase = match state.phase {
        Phase::Setup => PhaseSnapshot::Setup(SetupSnapshot {
            seats_filled: state.roster.len(),
            remaining_roles: remaining_roles(&state.roster.role_counts()),
        }),
        Phase::Night => PhaseSnapshot::Night(NightSnapshot {
            pending_role: state.night.as_ref().and_then(|n| n.pending_role()),
        }),
        Phase::Day => {
            let day = state.day.as_ref();
            PhaseSnapshot::Day(DaySnapshot {
                current_voter: day.and_then(|d| d.current_voter()),
                voters: day.map(|d| d.voters().to_vec()).unwrap_or_default(),
                votes_cast: day.map_or(0, |d| d.tally().total_votes()),
            })
        }
        Phase::End => PhaseSnapshot::End(EndSnapshot {
            ending: state.ending,
        }),
    };

    GameSnapshot {
        round: state.round,
        players,
        phase,
        log_len: state.event_log.len(),
    }
}
