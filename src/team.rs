#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::BENCH_TEAM_ID;
use crate::participant::Participant;
use crate::stats::team_stats;

/// A group of participants with derived score totals.
///
/// `total_score` and `average_score` are recomputed from `players` after every
/// change and cannot be set directly. Deserialized totals are ignored and
/// recomputed from the players.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TeamRecord")]
pub struct Team {
    #[cfg_attr(feature = "python", pyo3(get))]
    pub id: String,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub name: String,

    #[cfg_attr(feature = "python", pyo3(get))]
    players: Vec<Participant>,

    #[cfg_attr(feature = "python", pyo3(get))]
    total_score: f64,

    #[cfg_attr(feature = "python", pyo3(get))]
    average_score: f64,
}

#[derive(Deserialize)]
struct TeamRecord {
    id: String,
    name: String,
    #[serde(default)]
    players: Vec<Participant>,
}

impl From<TeamRecord> for Team {
    fn from(record: TeamRecord) -> Self {
        Team::with_players(record.id, record.name, record.players)
    }
}

impl Team {
    /// Create an empty team.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Team {
            id: id.into(),
            name: name.into(),
            players: Vec::new(),
            total_score: 0.0,
            average_score: 0.0,
        }
    }

    /// Create a team already holding `players`.
    pub fn with_players(
        id: impl Into<String>,
        name: impl Into<String>,
        players: Vec<Participant>,
    ) -> Self {
        let mut team = Team::new(id, name);
        team.players = players;
        team.recompute();
        team
    }

    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    pub fn average_score(&self) -> f64 {
        self.average_score
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Whether this is the non-competing leftover group.
    pub fn is_bench(&self) -> bool {
        self.id == BENCH_TEAM_ID
    }

    /// Add a participant and refresh the totals.
    pub fn push(&mut self, participant: Participant) {
        self.players.push(participant);
        self.recompute();
    }

    /// Exchange `self.players[mine]` with `other.players[theirs]`, refreshing both teams.
    pub fn swap_with(&mut self, mine: usize, other: &mut Team, theirs: usize) {
        std::mem::swap(&mut self.players[mine], &mut other.players[theirs]);
        self.recompute();
        other.recompute();
    }

    fn recompute(&mut self) {
        let stats = team_stats(&self.players);
        self.total_score = stats.total_score;
        self.average_score = stats.average_score;
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl Team {
    fn __len__(&self) -> usize {
        self.players.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Team({:?}, {} players, total={})",
            self.name,
            self.players.len(),
            self.total_score
        )
    }
}
