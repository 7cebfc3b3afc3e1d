use serde::{Deserialize, Serialize};

use crate::domain::roster::PlayerRoster;
use crate::domain::rules::RoleKind;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum WinOutcome {
    /// No side has won yet.
    Ongoing,
    /// Every Mafia player is dead.
    TownWin,
    /// Mafia players are at least as many as everyone else alive.
    MafiaWin,
}

impl WinOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, WinOutcome::Ongoing)
    }

    /// Closing line for the game log.
    pub fn message(self) -> Option<&'static str> {
        match self {
            WinOutcome::Ongoing => None,
            WinOutcome::TownWin => Some("Town Wins — Mafia eliminated!"),
            WinOutcome::MafiaWin => Some("Mafia Wins — Outnumbered the town!"),
        }
    }
}

/// Outcome from living Mafia (`mafia`) and living non-Mafia (`town`) counts.
pub fn evaluate_counts(mafia: usize, town: usize) -> WinOutcome {
    if mafia == 0 {
        WinOutcome::TownWin
    } else if mafia >= town {
        WinOutcome::MafiaWin
    } else {
        WinOutcome::Ongoing
    }
}

/// Count the living and decide. Dead players never count.
pub fn evaluate(roster: &PlayerRoster) -> WinOutcome {
    let (mafia, town) = living_counts(roster);
    evaluate_counts(mafia, town)
}

/// (living Mafia, living non-Mafia)
pub fn living_counts(roster: &PlayerRoster) -> (usize, usize) {
    roster
        .players()
        .iter()
        .filter(|p| p.alive)
        .fold((0, 0), |(m, t), p| match p.role {
            RoleKind::Mafia => (m + 1, t),
            RoleKind::Doctor | RoleKind::Civilian => (m, t + 1),
        })
}
