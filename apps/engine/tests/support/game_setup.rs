//! Controller builders shared by the game flow tests.

use mafia_engine::{GameController, RoleKind};

/// P1(Mafia), P2(Doctor), P3(Civilian), P4(Civilian): ids 0..=3.
pub const STANDARD: [(&str, RoleKind); 4] = [
    ("P1", RoleKind::Mafia),
    ("P2", RoleKind::Doctor),
    ("P3", RoleKind::Civilian),
    ("P4", RoleKind::Civilian),
];

pub const MAFIA: u8 = 0;
pub const DOCTOR: u8 = 1;
pub const CIV_A: u8 = 2;
pub const CIV_B: u8 = 3;

/// Controller that has just entered Night 1 with the standard line-up.
pub fn started_game() -> GameController {
    started_game_with(&STANDARD)
}

pub fn started_game_with(players: &[(&str, RoleKind)]) -> GameController {
    let mut game = GameController::new();
    for (name, role) in players {
        game.submit_player(name, *role)
            .unwrap_or_else(|e| panic!("setup rejected {name}: {e}"));
    }
    game
}
