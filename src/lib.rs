//! Team Balance Core - splits a scored roster into even teams.
//!
//! Parses free-form roster text, benches a random leftover group when the roster
//! does not divide evenly, balances the rest with one of several strategies and
//! reports how even the result is. Python bindings are available behind the
//! `python` feature.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod assign;
pub mod bench;
pub mod config;
pub mod constants;
pub mod error;
pub mod greedy;
pub mod hybrid;
pub mod names;
pub mod parser;
pub mod participant;
pub mod random;
pub mod snake;
pub mod stats;
pub mod strategy;
pub mod team;

pub use assign::{assign_teams, assign_teams_seeded, assign_teams_with_config, AssignmentResult};
pub use bench::{select_bench, BenchSplit};
pub use config::{AssignmentConfig, SwapPolicy};
pub use constants::{BENCH_TEAM_ID, GREEDY_TRIALS, MAX_SCORE, NAME_ONLY_SCORE};
pub use error::{BalanceError, Result};
pub use parser::{parse_participants, InputMode, ScoreRange};
pub use participant::Participant;
pub use stats::{
    balance_score, pool_stats, score_gap, standard_deviation, team_spread, team_stats, PoolStats,
    TeamSpread, TeamStats,
};
pub use strategy::{run_strategy, target_sizes, Algorithm};
pub use team::Team;

/// Parse roster text. `mode` is "default", "screen-assignment" or "general-assignment".
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "parse_participants", signature = (text, mode = None))]
fn py_parse_participants(text: &str, mode: Option<&str>) -> PyResult<Vec<Participant>> {
    let mode = match mode {
        Some(m) => m.parse::<InputMode>()?,
        None => InputMode::Default,
    };
    Ok(parse_participants(text, mode))
}

/// Assign participants to teams.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(
    name = "assign_teams",
    signature = (participants, team_count, algorithm = "greedy", seed = None, greedy_trials = GREEDY_TRIALS)
)]
fn py_assign_teams(
    participants: Vec<Participant>,
    team_count: usize,
    algorithm: &str,
    seed: Option<u64>,
    greedy_trials: usize,
) -> PyResult<AssignmentResult> {
    let algorithm = algorithm.parse::<Algorithm>()?;
    let config = AssignmentConfig::default().with_greedy_trials(greedy_trials);
    Ok(assign_teams_seeded(&participants, team_count, algorithm, &config, seed)?)
}

/// Balance score (0-100) of a list of teams.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "balance_score")]
fn py_balance_score(teams: Vec<Team>) -> f64 {
    balance_score(&teams)
}

/// Summary statistics of a participant list.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "pool_stats")]
fn py_pool_stats(participants: Vec<Participant>) -> PoolStats {
    pool_stats(&participants)
}

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn team_balance_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<Participant>()?;
    m.add_class::<Team>()?;
    m.add_class::<AssignmentResult>()?;
    m.add_class::<PoolStats>()?;

    // Functions
    m.add_function(wrap_pyfunction!(py_parse_participants, m)?)?;
    m.add_function(wrap_pyfunction!(py_assign_teams, m)?)?;
    m.add_function(wrap_pyfunction!(py_balance_score, m)?)?;
    m.add_function(wrap_pyfunction!(py_pool_stats, m)?)?;

    // Constants
    m.add("MAX_SCORE", MAX_SCORE)?;
    m.add("NAME_ONLY_SCORE", NAME_ONLY_SCORE)?;
    m.add("GREEDY_TRIALS", GREEDY_TRIALS)?;
    m.add("BENCH_TEAM_ID", BENCH_TEAM_ID)?;

    Ok(())
}
