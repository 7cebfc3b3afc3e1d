use std::collections::VecDeque;

use crate::domain::roster::PlayerRoster;
use crate::domain::state::PlayerId;
use crate::errors::domain::{DomainError, RosterError, VoteError};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct TallyEntry {
    target: PlayerId,
    count: u32,
    /// Sequence number of the vote that brought `count` to its current value.
    reached_at: u32,
}

/// Votes received per candidate, in the order candidates first got a vote.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct VoteTally {
    entries: Vec<TallyEntry>,
    votes_cast: u32,
}

impl VoteTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vote(&mut self, target: PlayerId) {
        let seq = self.votes_cast;
        self.votes_cast += 1;
        match self.entries.iter_mut().find(|e| e.target == target) {
            Some(entry) => {
                entry.count += 1;
                entry.reached_at = seq;
            }
            None => self.entries.push(TallyEntry {
                target,
                count: 1,
                reached_at: seq,
            }),
        }
    }

    pub fn count_for(&self, target: PlayerId) -> u32 {
        self.entries
            .iter()
            .find(|e| e.target == target)
            .map_or(0, |e| e.count)
    }

    /// (candidate, votes) in first-vote order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.entries.iter().map(|e| (e.target, e.count))
    }

    pub fn total_votes(&self) -> u32 {
        self.votes_cast
    }

    /// Candidate with the most votes.
    ///
    /// Ties go to whichever tied candidate reached the top count first, so
    /// `{A:2, B:2}` lynches A whenever A's second vote came before B's.
    pub fn leader(&self) -> Option<PlayerId> {
        let max = self.entries.iter().map(|e| e.count).max()?;
        self.entries
            .iter()
            .filter(|e| e.count == max)
            .min_by_key(|e| e.reached_at)
            .map(|e| e.target)
    }
}

/// Per-day voting state.
#[derive(Debug, Clone)]
pub struct DayRound {
    /// Living players at day start. Fixed for the round.
    voters: Vec<PlayerId>,
    queue: VecDeque<PlayerId>,
    tally: VoteTally,
    /// (voter, target) in the order votes were cast.
    ballots: Vec<(PlayerId, PlayerId)>,
}

impl DayRound {
    pub fn start(roster: &PlayerRoster) -> Self {
        let voters = roster.living_players();
        Self {
            queue: voters.iter().copied().collect(),
            voters,
            tally: VoteTally::new(),
            ballots: Vec::new(),
        }
    }

    pub fn current_voter(&self) -> Option<PlayerId> {
        self.queue.front().copied()
    }

    pub fn voters(&self) -> &[PlayerId] {
        &self.voters
    }

    pub fn has_voted(&self, voter: PlayerId) -> bool {
        self.ballots.iter().any(|&(v, _)| v == voter)
    }

    pub fn is_complete(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn tally(&self) -> &VoteTally {
        &self.tally
    }

    pub fn ballots(&self) -> &[(PlayerId, PlayerId)] {
        &self.ballots
    }
}

/// Every living player except the voter.
pub fn legal_vote_targets(roster: &PlayerRoster, voter: PlayerId) -> Vec<PlayerId> {
    roster
        .living_players()
        .into_iter()
        .filter(|&p| p != voter)
        .collect()
}

/// Record one vote from the voter at the head of the queue.
///
/// Rejections leave `day` untouched.
pub fn cast_vote(
    day: &mut DayRound,
    roster: &PlayerRoster,
    voter: PlayerId,
    target: PlayerId,
) -> Result<(), VoteError> {
    if !day.voters.contains(&voter) {
        return Err(VoteError::InvalidVoter(voter));
    }
    if day.has_voted(voter) {
        return Err(VoteError::VoterAlreadyVoted(voter));
    }
    let expected = day.current_voter();
    if expected != Some(voter) {
        return Err(VoteError::NotVotersTurn {
            expected,
            got: voter,
        });
    }
    if target == voter {
        return Err(VoteError::SelfVote(voter));
    }
    if !roster.is_alive(target) {
        return Err(VoteError::InvalidTarget(target));
    }

    day.tally.add_vote(target);
    day.ballots.push((voter, target));
    day.queue.pop_front();
    Ok(())
}

/// Lynch target for a tally; `None` only when nobody received a vote.
pub fn resolve(tally: &VoteTally) -> Option<PlayerId> {
    tally.leader()
}

/// Resolve a day whose voter queue has drained.
pub fn resolve_round(day: &DayRound) -> Result<PlayerId, DomainError> {
    if !day.is_complete() {
        return Err(DomainError::invariant("day resolved before every voter voted"));
    }
    resolve(&day.tally).ok_or_else(|| DomainError::invariant("day resolved with no votes"))
}

pub fn apply_lynch(roster: &mut PlayerRoster, lynched: PlayerId) -> Result<(), RosterError> {
    roster.eliminate(lynched)
}
