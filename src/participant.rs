#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::PARTICIPANT_ID_PREFIX;

/// A single person to be placed on a team.
///
/// Strategies clone participants into teams rather than moving or mutating them,
/// so the caller's list is untouched by an assignment run.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique within one parse, e.g. "player-3"
    #[cfg_attr(feature = "python", pyo3(get))]
    pub id: String,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub name: String,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub score: f64,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, score: f64) -> Self {
        Participant {
            id: id.into(),
            name: name.into(),
            score,
        }
    }

    /// Build a participant whose id is derived from its 1-based token position.
    pub fn at_position(position: usize, name: impl Into<String>, score: f64) -> Self {
        Participant::new(format!("{}{}", PARTICIPANT_ID_PREFIX, position), name, score)
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl Participant {
    #[new]
    fn py_new(id: String, name: String, score: f64) -> Self {
        Participant::new(id, name, score)
    }

    fn __repr__(&self) -> String {
        format!("Participant({:?}, {:?}, {})", self.id, self.name, self.score)
    }
}
