use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::domain::day::DayRound;
use crate::domain::night::NightRound;
use crate::domain::roster::PlayerRoster;
use crate::domain::rules::RoleKind;
use crate::domain::win::WinOutcome;
use crate::errors::domain::DomainError;

pub type PlayerId = u8; // 0..=3, join order

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Collecting the four (name, role) pairs.
    Setup,
    /// Mafia picks a kill target, then the Doctor picks someone to save.
    Night,
    /// Every living player votes once; the top candidate is lynched.
    Day,
    /// A win condition fired or the Doctor saved the Mafia's target.
    End,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Phase::Setup => write!(f, "Setup"),
            Phase::Night => write!(f, "Night"),
            Phase::Day => write!(f, "Day"),
            Phase::End => write!(f, "End"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub role: RoleKind,
    pub alive: bool,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameEnding {
    /// The Doctor saved the Mafia's target. Nobody died and nobody wins.
    DoctorSave { saved: PlayerId },
    /// A terminal win outcome.
    Victory(WinOutcome),
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    /// 1-based; bumped when a day ends without a winner.
    pub round: u32,
    pub roster: PlayerRoster,
    /// Human-readable, append-only record of what happened.
    pub event_log: Vec<String>,
    /// Present only during Night.
    pub night: Option<NightRound>,
    /// Present only during Day.
    pub day: Option<DayRound>,
    /// Present only in End.
    pub ending: Option<GameEnding>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Setup,
            round: 1,
            roster: PlayerRoster::new(),
            event_log: Vec::new(),
            night: None,
            day: None,
            ending: None,
        }
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.event_log.push(line.into());
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn require_night<'a>(
    night: &'a mut Option<NightRound>,
    ctx: &'static str,
) -> Result<&'a mut NightRound, DomainError> {
    night.as_mut().ok_or_else(|| {
        DomainError::invariant(format!("night round must be set during Night ({ctx})"))
    })
}

pub fn require_day<'a>(
    day: &'a mut Option<DayRound>,
    ctx: &'static str,
) -> Result<&'a mut DayRound, DomainError> {
    day.as_mut().ok_or_else(|| {
        DomainError::invariant(format!("day round must be set during Day ({ctx})"))
    })
}
