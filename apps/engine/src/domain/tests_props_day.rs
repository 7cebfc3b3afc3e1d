//! Property tests for vote tallying.
//!
//! - The leader always has the maximum count.
//! - Among tied leaders, the one that reached the count first wins.
//! - Every vote is counted exactly once.

use proptest::prelude::*;

use crate::domain::day::{resolve, VoteTally};
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::PlayerId;

fn tally_of(targets: &[PlayerId]) -> VoteTally {
    let mut tally = VoteTally::new();
    for &t in targets {
        tally.add_vote(t);
    }
    tally
}

/// Candidate whose running count first hits `max`, scanning votes in order.
fn first_to_reach_max(targets: &[PlayerId]) -> Option<PlayerId> {
    let max = (0..4u8)
        .map(|c| targets.iter().filter(|&&t| t == c).count())
        .max()?;
    let mut running = [0usize; 4];
    for &t in targets {
        running[t as usize] += 1;
        if running[t as usize] == max {
            return Some(t);
        }
    }
    None
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_leader_has_max_count(targets in test_gens::ballot_targets()) {
        let tally = tally_of(&targets);
        let leader = resolve(&tally).unwrap();
        let max = tally.iter().map(|(_, c)| c).max().unwrap();
        prop_assert_eq!(tally.count_for(leader), max);
    }

    #[test]
    fn prop_tie_goes_to_first_to_reach_max(targets in test_gens::ballot_targets()) {
        prop_assert_eq!(resolve(&tally_of(&targets)), first_to_reach_max(&targets));
    }

    #[test]
    fn prop_every_vote_is_counted(targets in test_gens::ballot_targets()) {
        let tally = tally_of(&targets);
        prop_assert_eq!(tally.total_votes() as usize, targets.len());
        let summed: u32 = tally.iter().map(|(_, c)| c).sum();
        prop_assert_eq!(summed as usize, targets.len());
    }

    #[test]
    fn prop_resolution_is_deterministic(targets in test_gens::ballot_targets()) {
        prop_assert_eq!(resolve(&tally_of(&targets)), resolve(&tally_of(&targets)));
    }
}
