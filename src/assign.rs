//! Entry point: bench selection, a balancing strategy and statistics in one call.

#[cfg(feature = "python")]
use pyo3::prelude::*;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::bench::select_bench;
use crate::config::AssignmentConfig;
use crate::constants::BENCH_TEAM_ID;
use crate::error::{BalanceError, Result};
use crate::participant::Participant;
use crate::stats::{balance_score, score_gap, standard_deviation};
use crate::strategy::{run_strategy, Algorithm};
use crate::team::Team;

/// Outcome of one assignment run.
///
/// `teams` lists the regular teams in order, followed by the bench team when
/// anyone had to sit out. The statistics cover regular teams only.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResult {
    pub teams: Vec<Team>,
    /// 0-100, higher is more even
    pub balance_score: f64,
    pub standard_deviation: f64,
    pub score_gap: f64,
}

impl AssignmentResult {
    fn from_teams(teams: Vec<Team>) -> Self {
        let regular: Vec<Team> = teams.iter().filter(|t| !t.is_bench()).cloned().collect();
        AssignmentResult {
            balance_score: balance_score(&regular),
            standard_deviation: standard_deviation(&regular),
            score_gap: score_gap(&regular),
            teams,
        }
    }

    /// Teams that compete, without the bench.
    pub fn regular_teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter().filter(|t| !t.is_bench())
    }

    pub fn bench(&self) -> Option<&Team> {
        self.teams.iter().find(|t| t.is_bench())
    }

    /// Player counts of the regular teams, in order.
    pub fn team_sizes(&self) -> Vec<usize> {
        self.regular_teams().map(Team::len).collect()
    }

    pub fn bench_size(&self) -> usize {
        self.bench().map_or(0, Team::len)
    }
}

/// Reject team counts that cannot produce non-empty teams.
pub fn validate(participant_count: usize, team_count: usize) -> Result<()> {
    if team_count < 1 {
        return Err(BalanceError::NoTeams);
    }
    if participant_count < team_count {
        return Err(BalanceError::NotEnoughParticipants {
            participants: participant_count,
            teams: team_count,
        });
    }
    Ok(())
}

/// Split `participants` into `team_count` balanced teams plus an optional bench.
pub fn assign_teams<R: Rng + ?Sized>(
    participants: &[Participant],
    team_count: usize,
    algorithm: Algorithm,
    rng: &mut R,
) -> Result<AssignmentResult> {
    assign_teams_with_config(
        participants,
        team_count,
        algorithm,
        &AssignmentConfig::default(),
        rng,
    )
}

/// [`assign_teams`] with explicit heuristic settings.
pub fn assign_teams_with_config<R: Rng + ?Sized>(
    participants: &[Participant],
    team_count: usize,
    algorithm: Algorithm,
    config: &AssignmentConfig,
    rng: &mut R,
) -> Result<AssignmentResult> {
    validate(participants.len(), team_count)?;

    let split = select_bench(participants, team_count, rng)?;
    let mut teams = run_strategy(algorithm, &split.main, team_count, config, rng)?;
    if !split.bench.is_empty() {
        teams.push(Team::with_players(
            BENCH_TEAM_ID,
            config.bench_name.clone(),
            split.bench,
        ));
    }

    let result = AssignmentResult::from_teams(teams);
    debug!(
        "{} assignment of {} participants into {} teams: balance {:.1}, gap {}",
        algorithm,
        participants.len(),
        team_count,
        result.balance_score,
        result.score_gap
    );
    Ok(result)
}

/// Run an assignment on a ChaCha8 stream seeded from `seed`, or from entropy when
/// no seed is given. The same seed reproduces the same result.
pub fn assign_teams_seeded(
    participants: &[Participant],
    team_count: usize,
    algorithm: Algorithm,
    config: &AssignmentConfig,
    seed: Option<u64>,
) -> Result<AssignmentResult> {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    assign_teams_with_config(participants, team_count, algorithm, config, &mut rng)
}

#[cfg(feature = "python")]
#[pymethods]
impl AssignmentResult {
    fn __repr__(&self) -> String {
        format!(
            "AssignmentResult({} teams, balance={:.1}, gap={})",
            self.teams.len(),
            self.balance_score,
            self.score_gap
        )
    }
}
