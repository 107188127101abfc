use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::participant::Participant;
use crate::stats::score_gap;
use crate::strategy::target_sizes;
use crate::team::Team;

/// Greedy placement repeated over independent shuffles, keeping the narrowest gap.
///
/// Each trial gets its own seed drawn from `rng`, so trials can run in parallel and
/// still give the same answer as a sequential run. Ties go to the earliest trial.
pub(crate) fn greedy_with_retry<R: Rng + ?Sized>(
    participants: &[Participant],
    teams: Vec<Team>,
    trials: usize,
    rng: &mut R,
) -> Vec<Team> {
    let seeds: Vec<u64> = (0..trials.max(1)).map(|_| rng.gen::<u64>()).collect();

    let best = seeds
        .par_iter()
        .enumerate()
        .map(|(trial, &seed)| {
            let mut trial_rng = ChaCha8Rng::seed_from_u64(seed);
            let filled = greedy_trial(participants, teams.clone(), &mut trial_rng);
            (trial, score_gap(&filled), filled)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

    match best {
        Some((trial, gap, filled)) => {
            debug!(
                "greedy kept trial {} of {} with gap {}",
                trial + 1,
                seeds.len(),
                gap
            );
            filled
        }
        None => teams,
    }
}

/// One greedy pass over shuffled groups, never filling a team past its target size.
///
/// Participants with score <= 0 go first, each to the open team with the fewest
/// players (lowest total on ties), so they spread one per team instead of piling
/// onto whichever team a negative score made lowest. The rest then join the
/// lowest-total open team.
pub(crate) fn greedy_trial<R: Rng + ?Sized>(
    participants: &[Participant],
    mut teams: Vec<Team>,
    rng: &mut R,
) -> Vec<Team> {
    let targets = target_sizes(participants.len(), teams.len());

    let (mut positive, mut non_positive): (Vec<Participant>, Vec<Participant>) =
        participants.iter().cloned().partition(|p| p.score > 0.0);
    non_positive.shuffle(rng);
    positive.shuffle(rng);

    for participant in non_positive {
        if let Some(index) = smallest_open_team(&teams, &targets) {
            teams[index].push(participant);
        }
    }
    for participant in positive {
        if let Some(index) = lowest_open_team(&teams, &targets) {
            teams[index].push(participant);
        }
    }

    teams
}

/// Index of the open team with the fewest players, then the lowest total; the
/// first one on ties.
fn smallest_open_team(teams: &[Team], targets: &[usize]) -> Option<usize> {
    teams
        .iter()
        .enumerate()
        .filter(|(i, team)| team.len() < targets[*i])
        .fold(None, |best: Option<(usize, usize, f64)>, (i, team)| match best {
            Some((_, len, total))
                if len < team.len() || (len == team.len() && total <= team.total_score()) =>
            {
                best
            }
            _ => Some((i, team.len(), team.total_score())),
        })
        .map(|(i, _, _)| i)
}

/// Index of the lowest-total team that has room left; the first one on ties.
fn lowest_open_team(teams: &[Team], targets: &[usize]) -> Option<usize> {
    teams
        .iter()
        .enumerate()
        .filter(|(i, team)| team.len() < targets[*i])
        .fold(None, |best: Option<(usize, f64)>, (i, team)| match best {
            Some((_, total)) if total <= team.total_score() => best,
            _ => Some((i, team.total_score())),
        })
        .map(|(i, _)| i)
}
