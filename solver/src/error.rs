use thiserror::Error;

use crate::maze::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// the frontier ran dry before the end cell was reached
    #[error("no solution: every reachable cell was explored without reaching the end")]
    NoSolutionFound,

    /// the discoverer chain from the end does not lead back to the start
    #[error("discoverer chain broken at {at}; path cannot be reconstructed")]
    NoPathReconstructed { at: Position },

    #[error("invalid grid state: {0}")]
    InvalidGridState(String),
}

impl SolveError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidGridState(reason.into())
    }
}

pub type SolveResult<T> = Result<T, SolveError>;
