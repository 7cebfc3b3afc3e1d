use crate::domain::player_view::player_view;
use crate::domain::rules::RoleKind;
use crate::domain::snapshot::{snapshot, PhaseSnapshot, Turn};
use crate::domain::state::{GameEnding, GameState, Phase};
use crate::domain::test_state_helpers::{day_state, night_state, standard_roster};
use crate::domain::win::WinOutcome;
use crate::errors::domain::RosterError;

#[test]
fn setup_snapshot_lists_remaining_roles() {
    let mut state = GameState::new();
    state.roster.add_player("Alice", RoleKind::Mafia).unwrap();

    let snap = snapshot(&state);
    assert_eq!(snap.phase_kind(), Phase::Setup);
    match &snap.phase {
        PhaseSnapshot::Setup(s) => {
            assert_eq!(s.seats_filled, 1);
            assert_eq!(
                s.remaining_roles,
                vec![RoleKind::Doctor, RoleKind::Civilian]
            );
        }
        other => panic!("expected Setup snapshot, got {other:?}"),
    }
    assert_eq!(snap.turn(), None);
}

#[test]
fn roles_stay_hidden_until_end() {
    let state = night_state(1, &[]);
    let snap = snapshot(&state);
    assert!(snap.players.iter().all(|p| p.role.is_none()));
    assert_eq!(snap.turn(), Some(Turn::NightRole(RoleKind::Mafia)));

    let mut ended = state.clone();
    ended.phase = Phase::End;
    ended.night = None;
    ended.ending = Some(GameEnding::DoctorSave { saved: 2 });
    let snap = snapshot(&ended);
    assert_eq!(snap.players[0].role, Some(RoleKind::Mafia));
    assert_eq!(snap.players[3].role, Some(RoleKind::Civilian));
    assert_eq!(snap.turn(), None);
}

#[test]
fn day_snapshot_tracks_voter_and_votes() {
    let state = day_state(1, &[2]);
    let snap = snapshot(&state);
    match &snap.phase {
        PhaseSnapshot::Day(d) => {
            assert_eq!(d.current_voter, Some(0));
            assert_eq!(d.voters, vec![0, 1, 3]);
            assert_eq!(d.votes_cast, 0);
        }
        other => panic!("expected Day snapshot, got {other:?}"),
    }
    assert!(!snap.is_alive(2));
    assert!(snap.is_alive(3));
}

#[test]
fn snapshot_serializes_with_phase_tag() {
    let mut state = GameState::new();
    state.roster = standard_roster();
    state.phase = Phase::End;
    state.ending = Some(GameEnding::Victory(WinOutcome::TownWin));

    let json = serde_json::to_value(snapshot(&state)).unwrap();
    assert_eq!(json["phase"]["phase"], "End");
    assert_eq!(json["phase"]["data"]["ending"]["Victory"], "TownWin");
    assert_eq!(json["players"][1]["role"], "Doctor");
}

#[test]
fn player_view_exposes_legal_targets_only_on_turn() {
    let state = night_state(1, &[]);

    let mafia = player_view(&state, 0).unwrap();
    assert!(mafia.to_act);
    assert_eq!(mafia.role, RoleKind::Mafia);
    assert_eq!(mafia.legal_targets, vec![0, 1, 2, 3]);

    let doctor = player_view(&state, 1).unwrap();
    assert!(!doctor.to_act);
    assert!(doctor.legal_targets.is_empty());

    let civilian = player_view(&state, 2).unwrap();
    assert!(!civilian.to_act);
}

#[test]
fn player_view_during_day_excludes_self() {
    let state = day_state(1, &[3]);
    let view = player_view(&state, 0).unwrap();
    assert!(view.to_act);
    assert_eq!(view.legal_targets, vec![1, 2]);
    assert_eq!(view.living, vec![0, 1, 2]);
}

#[test]
fn player_view_rejects_unknown_seat() {
    let state = night_state(1, &[]);
    assert_eq!(
        player_view(&state, 7).unwrap_err(),
        RosterError::UnknownPlayer(7)
    );
}
