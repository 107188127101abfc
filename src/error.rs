use thiserror::Error;

/// Errors surfaced to the caller of the assignment engine.
///
/// Unparsable input text is never an error: bad tokens are dropped and
/// out-of-range scores are clamped during parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BalanceError {
    #[error("team count must be at least 1")]
    NoTeams,

    #[error("not enough participants: {participants} for {teams} teams")]
    NotEnoughParticipants { participants: usize, teams: usize },

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("unknown input mode: {0}")]
    UnknownInputMode(String),
}

impl BalanceError {
    /// True for the errors caused by an impossible team count / participant count pairing.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            BalanceError::NoTeams | BalanceError::NotEnoughParticipants { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BalanceError>;

#[cfg(feature = "python")]
impl From<BalanceError> for pyo3::PyErr {
    fn from(err: BalanceError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
