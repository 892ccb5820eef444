use std::fmt;
use std::time::Duration;

use crate::{error::SolveResult, maze::Grid};

use super::path::Path;

/// Order in which the frontier hands back discovered cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// last in, first out
    DepthFirst,
    /// first in, first out
    BreadthFirst,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "depth-first",
            Self::BreadthFirst => "breadth-first",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub trait PathfindingAlgorithm {
    /// Solves `grid` from its start to its end cell.
    ///
    /// The grid must be freshly created or reset; exploration state is
    /// written into it as a side effect.
    fn find_path(&self, grid: &mut Grid) -> SolveResult<Path>;

    fn name(&self) -> &'static str;
}

pub struct PathResult {
    pub path: Path,
    pub explored: usize,
    pub planning_time: Duration,
}

impl PathResult {
    pub fn new(path: Path, explored: usize, planning_time: Duration) -> Self {
        Self {
            path,
            explored,
            planning_time,
        }
    }

    /// path length in cells, start and end included
    pub fn steps(&self) -> usize {
        self.path.len()
    }
}
