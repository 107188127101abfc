//! Balance statistics over teams and participant pools.
//!
//! All functions are pure: the same input always yields the same numbers.

#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::participant::Participant;
use crate::team::Team;

/// Sum and mean of a player list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeamStats {
    pub total_score: f64,
    pub average_score: f64,
}

/// Score spread inside a single team.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSpread {
    pub min_score: f64,
    pub max_score: f64,
    pub score_range: f64,
    /// 0-100, 100 when every player on the team has the same score
    pub internal_balance: f64,
}

/// Summary of a participant pool before assignment.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStats {
    pub total_players: usize,
    pub average_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub standard_deviation: f64,
}

/// Total and average score of `players`. The average of an empty list is 0.
pub fn team_stats(players: &[Participant]) -> TeamStats {
    let total_score: f64 = players.iter().map(|p| p.score).sum();
    let average_score = if players.is_empty() {
        0.0
    } else {
        total_score / players.len() as f64
    };
    TeamStats {
        total_score,
        average_score,
    }
}

/// Population standard deviation of the team totals, 0 for no teams.
pub fn standard_deviation(teams: &[Team]) -> f64 {
    if teams.is_empty() {
        return 0.0;
    }
    teams.iter().map(|t| t.total_score()).population_std_dev()
}

/// Difference between the highest and lowest team total, 0 for no teams.
pub fn score_gap(teams: &[Team]) -> f64 {
    let (min, max) = min_max(teams.iter().map(|t| t.total_score()));
    max - min
}

/// Normalized balance of the team totals on a 0-100 scale.
///
/// Averages the std-dev/mean and gap/mean ratios and maps 0 to 100. A single team
/// (or none) is trivially balanced. When the mean total is not positive both ratios
/// count as 0.
pub fn balance_score(teams: &[Team]) -> f64 {
    if teams.len() <= 1 {
        return 100.0;
    }

    let mean = teams.iter().map(|t| t.total_score()).sum::<f64>() / teams.len() as f64;
    let (std_dev_ratio, gap_ratio) = if mean > 0.0 {
        (standard_deviation(teams) / mean, score_gap(teams) / mean)
    } else {
        (0.0, 0.0)
    };

    let balance_ratio = (std_dev_ratio + gap_ratio) / 2.0;
    (100.0 - balance_ratio * 100.0).clamp(0.0, 100.0)
}

/// Min/max/range of the scores on one team plus a 0-100 internal balance.
pub fn team_spread(team: &Team) -> TeamSpread {
    if team.is_empty() {
        return TeamSpread {
            min_score: 0.0,
            max_score: 0.0,
            score_range: 0.0,
            internal_balance: 100.0,
        };
    }

    let (min_score, max_score) = min_max(team.players().iter().map(|p| p.score));
    let score_range = max_score - min_score;
    let average = team.average_score();
    let internal_balance = if score_range == 0.0 {
        100.0
    } else if average > 0.0 {
        (100.0 - score_range / average * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    TeamSpread {
        min_score,
        max_score,
        score_range,
        internal_balance,
    }
}

/// Count, mean, extremes and population std-dev of individual scores.
pub fn pool_stats(participants: &[Participant]) -> PoolStats {
    if participants.is_empty() {
        return PoolStats {
            total_players: 0,
            average_score: 0.0,
            min_score: 0.0,
            max_score: 0.0,
            standard_deviation: 0.0,
        };
    }

    let (min_score, max_score) = min_max(participants.iter().map(|p| p.score));
    PoolStats {
        total_players: participants.len(),
        average_score: team_stats(participants).average_score,
        min_score,
        max_score,
        standard_deviation: participants.iter().map(|p| p.score).population_std_dev(),
    }
}

/// (min, max) of the values, (0, 0) when there are none.
fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_with_scores(id: &str, scores: &[f64]) -> Team {
        let players = scores
            .iter()
            .enumerate()
            .map(|(i, &s)| Participant::at_position(i + 1, format!("{}-{}", id, i), s))
            .collect();
        Team::with_players(id, id, players)
    }

    #[test]
    fn test_team_stats_empty() {
        let stats = team_stats(&[]);
        assert_eq!(stats.total_score, 0.0);
        assert_eq!(stats.average_score, 0.0);
    }

    #[test]
    fn test_team_stats_repeatable() {
        let players: Vec<Participant> = (1..=5)
            .map(|i| Participant::at_position(i, "x", i as f64 * 1.1))
            .collect();
        let first = team_stats(&players);
        for _ in 0..10 {
            assert_eq!(team_stats(&players), first);
        }
        assert!((first.total_score - 16.5).abs() < 1e-10);
        assert!((first.average_score - 3.3).abs() < 1e-10);
    }

    #[test]
    fn test_standard_deviation_population() {
        // totals 2, 4, 4, 4, 5, 5, 7, 9 -> population std-dev 2
        let teams: Vec<Team> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
            .iter()
            .enumerate()
            .map(|(i, &s)| team_with_scores(&format!("t{}", i), &[s]))
            .collect();
        assert!((standard_deviation(&teams) - 2.0).abs() < 1e-10);
        assert_eq!(standard_deviation(&[]), 0.0);
    }

    #[test]
    fn test_balance_score_equal_totals() {
        let teams = vec![
            team_with_scores("a", &[10.0, 5.0]),
            team_with_scores("b", &[7.0, 8.0]),
            team_with_scores("c", &[15.0]),
        ];
        assert_eq!(balance_score(&teams), 100.0);
        assert_eq!(score_gap(&teams), 0.0);
    }

    #[test]
    fn test_balance_score_single_team() {
        let teams = vec![team_with_scores("a", &[1.0, 20.0])];
        assert_eq!(balance_score(&teams), 100.0);
        assert_eq!(balance_score(&[]), 100.0);
    }

    #[test]
    fn test_balance_score_decreases_with_spread() {
        // mean held at 10 while the spread grows
        let narrow = vec![team_with_scores("a", &[9.0]), team_with_scores("b", &[11.0])];
        let wide = vec![team_with_scores("a", &[5.0]), team_with_scores("b", &[15.0])];
        let extreme = vec![team_with_scores("a", &[0.0]), team_with_scores("b", &[20.0])];

        let narrow_score = balance_score(&narrow);
        let wide_score = balance_score(&wide);
        let extreme_score = balance_score(&extreme);

        // narrow: std 1, gap 2 -> ratio 0.15 -> 85
        assert!((narrow_score - 85.0).abs() < 1e-10);
        assert!(wide_score <= narrow_score);
        assert!(extreme_score <= wide_score);
        assert!(extreme_score >= 0.0);
    }

    #[test]
    fn test_balance_score_zero_mean() {
        let teams = vec![team_with_scores("a", &[0.0]), team_with_scores("b", &[0.0])];
        assert_eq!(balance_score(&teams), 100.0);
    }

    #[test]
    fn test_team_spread() {
        let spread = team_spread(&team_with_scores("a", &[4.0, 8.0, 12.0]));
        assert_eq!(spread.min_score, 4.0);
        assert_eq!(spread.max_score, 12.0);
        assert_eq!(spread.score_range, 8.0);
        assert!((spread.internal_balance - 0.0).abs() < 1e-10);

        let flat = team_spread(&team_with_scores("b", &[6.0, 6.0]));
        assert_eq!(flat.internal_balance, 100.0);

        let empty = team_spread(&Team::new("c", "c"));
        assert_eq!(empty.score_range, 0.0);
        assert_eq!(empty.internal_balance, 100.0);
    }

    #[test]
    fn test_pool_stats() {
        let players: Vec<Participant> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
            .iter()
            .enumerate()
            .map(|(i, &s)| Participant::at_position(i + 1, "x", s))
            .collect();
        let stats = pool_stats(&players);
        assert_eq!(stats.total_players, 8);
        assert!((stats.average_score - 5.0).abs() < 1e-10);
        assert_eq!(stats.min_score, 2.0);
        assert_eq!(stats.max_score, 9.0);
        assert!((stats.standard_deviation - 2.0).abs() < 1e-10);

        let empty = pool_stats(&[]);
        assert_eq!(empty.total_players, 0);
        assert_eq!(empty.standard_deviation, 0.0);
    }
}
