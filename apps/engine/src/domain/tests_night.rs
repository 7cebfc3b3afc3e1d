use crate::domain::night::{
    apply_outcome, legal_night_targets, record_action, resolve, resolve_round, NightOutcome,
    NightRound,
};
use crate::domain::rules::RoleKind;
use crate::domain::test_state_helpers::{kill, standard_roster};
use crate::errors::domain::{ActionError, DomainError, RosterError};

#[test]
fn queue_runs_mafia_then_doctor() {
    let roster = standard_roster();
    let mut night = NightRound::start(&roster);
    assert_eq!(night.pending_role(), Some(RoleKind::Mafia));

    record_action(&mut night, &roster, RoleKind::Mafia, 2).unwrap();
    assert_eq!(night.pending_role(), Some(RoleKind::Doctor));
    assert!(!night.is_complete());

    record_action(&mut night, &roster, RoleKind::Doctor, 3).unwrap();
    assert!(night.is_complete());
    assert_eq!(night.action().kill_target, Some(2));
    assert_eq!(night.action().save_target, Some(3));
}

#[test]
fn dead_doctor_is_skipped() {
    let mut roster = standard_roster();
    kill(&mut roster, &[1]);
    let mut night = NightRound::start(&roster);

    record_action(&mut night, &roster, RoleKind::Mafia, 2).unwrap();
    assert!(night.is_complete());
    assert_eq!(resolve_round(&night).unwrap(), NightOutcome::Killed(2));
}

#[test]
fn doctor_out_of_turn_is_rejected_and_state_kept() {
    let roster = standard_roster();
    let mut night = NightRound::start(&roster);

    let err = record_action(&mut night, &roster, RoleKind::Doctor, 0).unwrap_err();
    assert_eq!(
        err,
        ActionError::OutOfTurn {
            expected: Some(RoleKind::Mafia),
            got: RoleKind::Doctor
        }
    );
    assert_eq!(night.pending_role(), Some(RoleKind::Mafia));
    assert_eq!(night.action().save_target, None);
}

#[test]
fn civilian_has_no_night_action() {
    let roster = standard_roster();
    let mut night = NightRound::start(&roster);
    assert_eq!(
        record_action(&mut night, &roster, RoleKind::Civilian, 0),
        Err(ActionError::UnknownRole(RoleKind::Civilian))
    );
}

#[test]
fn dead_or_unknown_targets_are_rejected() {
    let mut roster = standard_roster();
    kill(&mut roster, &[3]);
    let mut night = NightRound::start(&roster);

    assert_eq!(
        record_action(&mut night, &roster, RoleKind::Mafia, 3),
        Err(ActionError::InvalidTarget(3))
    );
    assert_eq!(
        record_action(&mut night, &roster, RoleKind::Mafia, 9),
        Err(ActionError::InvalidTarget(9))
    );
    assert_eq!(night.pending_role(), Some(RoleKind::Mafia));
}

#[test]
fn self_targets_are_allowed() {
    let roster = standard_roster();
    let mut night = NightRound::start(&roster);
    record_action(&mut night, &roster, RoleKind::Mafia, 0).unwrap();
    record_action(&mut night, &roster, RoleKind::Doctor, 1).unwrap();
    assert_eq!(resolve_round(&night).unwrap(), NightOutcome::Killed(0));
}

#[test]
fn resolve_compares_save_against_kill() {
    assert_eq!(resolve(2, Some(2)), NightOutcome::Saved(2));
    assert_eq!(resolve(2, Some(3)), NightOutcome::Killed(2));
    assert_eq!(resolve(2, None), NightOutcome::Killed(2));
}

#[test]
fn resolve_round_before_completion_is_an_invariant_error() {
    let roster = standard_roster();
    let night = NightRound::start(&roster);
    assert!(matches!(
        resolve_round(&night),
        Err(DomainError::Invariant(_))
    ));
}

#[test]
fn apply_outcome_only_kills_on_killed() {
    let mut roster = standard_roster();
    apply_outcome(&mut roster, NightOutcome::Saved(2)).unwrap();
    assert_eq!(roster.living_players(), vec![0, 1, 2, 3]);

    apply_outcome(&mut roster, NightOutcome::Killed(2)).unwrap();
    assert_eq!(roster.living_players(), vec![0, 1, 3]);
    assert_eq!(legal_night_targets(&roster), vec![0, 1, 3]);

    assert_eq!(
        apply_outcome(&mut roster, NightOutcome::Killed(2)),
        Err(RosterError::AlreadyDead(2))
    );
}
