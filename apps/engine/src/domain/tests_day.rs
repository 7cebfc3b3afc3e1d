use crate::domain::day::{
    apply_lynch, cast_vote, legal_vote_targets, resolve, resolve_round, DayRound, VoteTally,
};
use crate::domain::test_state_helpers::{kill, standard_roster};
use crate::errors::domain::{DomainError, VoteError};

#[test]
fn voters_are_fixed_at_day_start_in_join_order() {
    let mut roster = standard_roster();
    kill(&mut roster, &[2]);
    let day = DayRound::start(&roster);
    assert_eq!(day.voters(), &[0, 1, 3]);
    assert_eq!(day.current_voter(), Some(0));
}

#[test]
fn full_round_lynches_the_top_candidate() {
    let mut roster = standard_roster();
    kill(&mut roster, &[2]);
    let mut day = DayRound::start(&roster);

    cast_vote(&mut day, &roster, 0, 1).unwrap();
    cast_vote(&mut day, &roster, 1, 0).unwrap();
    cast_vote(&mut day, &roster, 3, 0).unwrap();

    assert!(day.is_complete());
    assert_eq!(day.tally().count_for(0), 2);
    assert_eq!(day.ballots(), &[(0, 1), (1, 0), (3, 0)]);
    assert_eq!(resolve_round(&day).unwrap(), 0);

    apply_lynch(&mut roster, 0).unwrap();
    assert!(!roster.is_alive(0));
}

#[test]
fn tie_goes_to_first_candidate_to_reach_the_max() {
    // A=1, B=2: A reaches 2 votes first.
    let mut tally = VoteTally::new();
    for t in [1, 2, 1, 2] {
        tally.add_vote(t);
    }
    assert_eq!(resolve(&tally), Some(1));

    // B was voted for first, but A still gets to 2 first. This departs from
    // first-inserted-candidate order on purpose.
    let mut tally = VoteTally::new();
    for t in [2, 1, 1, 2] {
        tally.add_vote(t);
    }
    assert_eq!(resolve(&tally), Some(1));

    // And the mirror image.
    let mut tally = VoteTally::new();
    for t in [1, 2, 2, 1] {
        tally.add_vote(t);
    }
    assert_eq!(resolve(&tally), Some(2));
}

#[test]
fn tie_break_is_stable_across_runs() {
    let run = || {
        let mut tally = VoteTally::new();
        for t in [3, 0, 0, 3] {
            tally.add_vote(t);
        }
        resolve(&tally)
    };
    for _ in 0..10 {
        assert_eq!(run(), Some(0));
    }
}

#[test]
fn empty_tally_has_no_leader() {
    assert_eq!(resolve(&VoteTally::new()), None);
}

#[test]
fn self_vote_is_rejected() {
    let roster = standard_roster();
    let mut day = DayRound::start(&roster);
    assert_eq!(
        cast_vote(&mut day, &roster, 0, 0),
        Err(VoteError::SelfVote(0))
    );
    assert_eq!(day.tally().total_votes(), 0);
    assert_eq!(day.current_voter(), Some(0));
}

#[test]
fn dead_target_is_rejected() {
    let mut roster = standard_roster();
    kill(&mut roster, &[2]);
    let mut day = DayRound::start(&roster);
    assert_eq!(
        cast_vote(&mut day, &roster, 0, 2),
        Err(VoteError::InvalidTarget(2))
    );
}

#[test]
fn out_of_turn_and_repeat_votes_are_rejected() {
    let roster = standard_roster();
    let mut day = DayRound::start(&roster);

    assert_eq!(
        cast_vote(&mut day, &roster, 2, 0),
        Err(VoteError::NotVotersTurn {
            expected: Some(0),
            got: 2
        })
    );

    cast_vote(&mut day, &roster, 0, 1).unwrap();
    assert_eq!(
        cast_vote(&mut day, &roster, 0, 2),
        Err(VoteError::VoterAlreadyVoted(0))
    );
}

#[test]
fn dead_players_cannot_vote() {
    let mut roster = standard_roster();
    kill(&mut roster, &[2]);
    let mut day = DayRound::start(&roster);
    assert_eq!(
        cast_vote(&mut day, &roster, 2, 0),
        Err(VoteError::InvalidVoter(2))
    );
}

#[test]
fn legal_vote_targets_exclude_voter_and_dead() {
    let mut roster = standard_roster();
    kill(&mut roster, &[3]);
    assert_eq!(legal_vote_targets(&roster, 1), vec![0, 2]);
}

#[test]
fn resolving_an_open_round_is_an_invariant_error() {
    let roster = standard_roster();
    let day = DayRound::start(&roster);
    assert!(matches!(resolve_round(&day), Err(DomainError::Invariant(_))));
}
