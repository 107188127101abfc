use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{BalanceError, Result};
use crate::participant::Participant;

/// Participants split into the leftover group and the ones that play.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BenchSplit {
    pub bench: Vec<Participant>,
    /// Remaining participants in their original input order
    pub main: Vec<Participant>,
}

/// Number of participants that must sit out so the rest divide evenly into teams.
pub fn bench_count(participant_count: usize, team_count: usize) -> usize {
    if team_count == 0 {
        0
    } else {
        participant_count % team_count
    }
}

/// Pick the leftover group uniformly at random, independent of score.
///
/// The bench is the head of a Fisher-Yates shuffle of the participants; `main`
/// keeps the input order of everyone else.
pub fn select_bench<R: Rng + ?Sized>(
    participants: &[Participant],
    team_count: usize,
    rng: &mut R,
) -> Result<BenchSplit> {
    if team_count == 0 {
        return Err(BalanceError::NoTeams);
    }

    let count = bench_count(participants.len(), team_count);
    if count == 0 {
        return Ok(BenchSplit {
            bench: Vec::new(),
            main: participants.to_vec(),
        });
    }

    // Shuffle positions rather than records so duplicate ids cannot leak into both groups
    let mut order: Vec<usize> = (0..participants.len()).collect();
    order.shuffle(rng);
    order.truncate(count);

    let benched: HashSet<usize> = order.iter().copied().collect();
    let bench = order.iter().map(|&i| participants[i].clone()).collect();
    let main = participants
        .iter()
        .enumerate()
        .filter(|(i, _)| !benched.contains(i))
        .map(|(_, p)| p.clone())
        .collect();

    debug!(
        "benched {} of {} participants for {} teams",
        count,
        participants.len(),
        team_count
    );

    Ok(BenchSplit { bench, main })
}
