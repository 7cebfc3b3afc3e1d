use serde::{Deserialize, Serialize};

use crate::domain::snapshot::{GameSnapshot, PhaseSnapshot, Turn};
use crate::domain::state::{GameEnding, Phase, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameTransition {
    /// Edge-triggered: Setup -> Night.
    GameStarted,

    /// Edge-triggered: the phase changed.
    PhaseChanged { from: Phase, to: Phase, round: u32 },

    /// Edge-triggered: a player alive before is dead after.
    PlayerEliminated { player_id: PlayerId },

    /// Edge-triggered: the turn became a specific night role or voter.
    TurnBecame { turn: Turn },

    /// Edge-triggered: !End -> End.
    GameEnded { ending: Option<GameEnding> },
}

/// Derive transitions from before/after snapshots, in a stable order.
pub fn derive_game_transitions(before: &GameSnapshot, after: &GameSnapshot) -> Vec<GameTransition> {
    let mut transitions = Vec::new();
    let (from, to) = (before.phase_kind(), after.phase_kind());

    // 1. Game start
    if from == Phase::Setup && to == Phase::Night {
        transitions.push(GameTransition::GameStarted);
    }

    // 2. Phase change
    if from != to {
        transitions.push(GameTransition::PhaseChanged {
            from,
            to,
            round: after.round,
        });
    }

    // 3. Eliminations, in join order. A restart empties the roster and
    // removes nobody.
    for player in &after.players {
        if !player.alive && before.is_alive(player.id) {
            transitions.push(GameTransition::PlayerEliminated {
                player_id: player.id,
            });
        }
    }

    // 4. Turn change. The same voter twice in a row cannot happen, so a
    // repeated turn across a phase change is still reported.
    if let Some(turn) = after.turn() {
        if before.turn() != Some(turn) || from != to {
            transitions.push(GameTransition::TurnBecame { turn });
        }
    }

    // 5. Game end
    if from != Phase::End && to == Phase::End {
        let ending = match &after.phase {
            PhaseSnapshot::End(end) => end.ending,
            _ => None,
        };
        transitions.push(GameTransition::GameEnded { ending });
    }

    transitions
}
