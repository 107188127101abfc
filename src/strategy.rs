//! Algorithm selection and the helpers shared by every strategy.
//!
//! A strategy receives the playing participants and a set of empty, already named
//! teams, and returns those teams filled. Every participant lands on exactly one team.
//! The team-filling functions stay crate-private; [`run_strategy`] builds the empty
//! teams itself so callers cannot hand in pre-filled or missing teams.

use std::fmt;
use std::str::FromStr;

use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::AssignmentConfig;
use crate::constants::TEAM_ID_PREFIX;
use crate::error::{BalanceError, Result};
use crate::greedy::greedy_with_retry;
use crate::hybrid::hybrid;
use crate::names::generate_team_name;
use crate::participant::Participant;
use crate::random::random_split;
use crate::snake::snake_draft;
use crate::team::Team;

/// Balancing policy used for an assignment run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Multi-start lowest-total-first placement
    #[default]
    Greedy,
    Snake,
    Random,
    /// Serpentine distribution plus one swap between the extreme teams
    Hybrid,
    /// Reserved for exhaustive search; runs greedy
    Optimal,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Greedy,
        Algorithm::Snake,
        Algorithm::Random,
        Algorithm::Hybrid,
        Algorithm::Optimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Snake => "snake",
            Algorithm::Random => "random",
            Algorithm::Hybrid => "hybrid",
            Algorithm::Optimal => "optimal",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = BalanceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == tag)
            .ok_or(BalanceError::UnknownAlgorithm(tag))
    }
}

/// Exact per-team sizes: `total / team_count` each, one extra for the first
/// `total % team_count` teams.
pub fn target_sizes(total: usize, team_count: usize) -> Vec<usize> {
    if team_count == 0 {
        return Vec::new();
    }
    let base = total / team_count;
    let remainder = total % team_count;
    (0..team_count)
        .map(|i| base + usize::from(i < remainder))
        .collect()
}

/// `team_count` empty teams with ids `team-1..` and random display names.
pub fn empty_teams<R: Rng + ?Sized>(team_count: usize, rng: &mut R) -> Vec<Team> {
    (1..=team_count)
        .map(|n| Team::new(format!("{}{}", TEAM_ID_PREFIX, n), generate_team_name(rng)))
        .collect()
}

/// Sort a copy of `participants` by score, highest first. Equal scores keep input order.
pub(crate) fn sorted_by_score_desc(participants: &[Participant]) -> Vec<Participant> {
    let mut sorted = participants.to_vec();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
    sorted
}

/// Team index for the `position`-th pick of a snake draft over `team_count` teams:
/// 0, 1, .., n-1, n-1, .., 1, 0, 0, 1, ..
pub(crate) fn serpentine_index(position: usize, team_count: usize) -> usize {
    let pass = position / team_count;
    let offset = position % team_count;
    if pass % 2 == 0 {
        offset
    } else {
        team_count - 1 - offset
    }
}

/// Fill the empty, non-empty-list `teams` from `participants` with the chosen algorithm.
pub(crate) fn distribute<R: Rng + ?Sized>(
    algorithm: Algorithm,
    participants: &[Participant],
    teams: Vec<Team>,
    config: &AssignmentConfig,
    rng: &mut R,
) -> Vec<Team> {
    match algorithm {
        Algorithm::Greedy => greedy_with_retry(participants, teams, config.greedy_trials, rng),
        Algorithm::Snake => snake_draft(participants, teams),
        Algorithm::Random => random_split(participants, teams, rng),
        Algorithm::Hybrid => hybrid(participants, teams, config.swap_policy),
        Algorithm::Optimal => {
            warn!("exhaustive search is not available, falling back to greedy");
            greedy_with_retry(participants, teams, config.greedy_trials, rng)
        }
    }
}

/// Run a strategy on `participants`, producing `team_count` fresh teams that
/// together hold every participant exactly once.
pub fn run_strategy<R: Rng + ?Sized>(
    algorithm: Algorithm,
    participants: &[Participant],
    team_count: usize,
    config: &AssignmentConfig,
    rng: &mut R,
) -> Result<Vec<Team>> {
    if team_count == 0 {
        return Err(BalanceError::NoTeams);
    }
    let teams = empty_teams(team_count, rng);
    Ok(distribute(algorithm, participants, teams, config, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_target_sizes() {
        assert_eq!(target_sizes(12, 3), vec![4, 4, 4]);
        assert_eq!(target_sizes(14, 3), vec![5, 5, 4]);
        assert_eq!(target_sizes(2, 4), vec![1, 1, 0, 0]);
        assert!(target_sizes(5, 0).is_empty());
    }

    #[test]
    fn test_serpentine_index() {
        let order: Vec<usize> = (0..9).map(|i| serpentine_index(i, 3)).collect();
        assert_eq!(order, vec![0, 1, 2, 2, 1, 0, 0, 1, 2]);
        assert!((0..5).all(|i| serpentine_index(i, 1) == 0));
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("greedy".parse::<Algorithm>(), Ok(Algorithm::Greedy));
        assert_eq!(" Snake ".parse::<Algorithm>(), Ok(Algorithm::Snake));
        assert_eq!("HYBRID".parse::<Algorithm>(), Ok(Algorithm::Hybrid));
        assert_eq!(
            "brute".parse::<Algorithm>(),
            Err(BalanceError::UnknownAlgorithm("brute".to_string()))
        );
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_empty_teams() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let teams = empty_teams(3, &mut rng);
        let ids: Vec<&str> = teams.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["team-1", "team-2", "team-3"]);
        assert!(teams.iter().all(|t| t.is_empty() && !t.name.is_empty()));
    }

    #[test]
    fn test_every_algorithm_partitions() {
        let players: Vec<Participant> = (1..=11)
            .map(|i| Participant::at_position(i, format!("P{}", i), (i * 3 % 7) as f64))
            .collect();
        let config = AssignmentConfig::default();

        for algorithm in Algorithm::ALL {
            let mut rng = ChaCha8Rng::seed_from_u64(21);
            let teams = run_strategy(algorithm, &players, 3, &config, &mut rng).unwrap();
            assert_eq!(teams.len(), 3);

            let mut ids: Vec<String> = teams
                .iter()
                .flat_map(|t| t.players().iter().map(|p| p.id.clone()))
                .collect();
            ids.sort();
            let mut expected: Vec<String> = players.iter().map(|p| p.id.clone()).collect();
            expected.sort();
            assert_eq!(ids, expected, "{} lost or duplicated players", algorithm);

            let sizes: Vec<usize> = teams.iter().map(Team::len).collect();
            let spread = sizes.iter().max().unwrap() - sizes.iter().min().unwrap();
            assert!(spread <= 1, "{} produced sizes {:?}", algorithm, sizes);
        }
    }

    #[test]
    fn test_zero_teams_rejected() {
        let players = vec![Participant::at_position(1, "P1", 4.0)];
        let config = AssignmentConfig::default();
        for algorithm in Algorithm::ALL {
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            assert_eq!(
                run_strategy(algorithm, &players, 0, &config, &mut rng),
                Err(BalanceError::NoTeams)
            );
        }
    }

    #[test]
    fn test_more_teams_than_players_keeps_everyone() {
        let players: Vec<Participant> = (1..=3)
            .map(|i| Participant::at_position(i, format!("P{}", i), i as f64))
            .collect();
        let config = AssignmentConfig::default();
        for algorithm in Algorithm::ALL {
            let mut rng = ChaCha8Rng::seed_from_u64(2);
            let teams = run_strategy(algorithm, &players, 5, &config, &mut rng).unwrap();
            assert_eq!(teams.len(), 5);
            let placed: usize = teams.iter().map(Team::len).sum();
            assert_eq!(placed, 3, "{} dropped players", algorithm);
        }
    }
}
