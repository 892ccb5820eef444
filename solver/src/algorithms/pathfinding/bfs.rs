use crate::{error::SolveResult, maze::Grid};

use super::{
    path::Path,
    traits::{PathfindingAlgorithm, Strategy},
    traversal,
};

/// Shortest path in cells, since every cell is queued at most once.
#[allow(clippy::upper_case_acronyms)]
pub struct BFS;

impl PathfindingAlgorithm for BFS {
    fn find_path(&self, grid: &mut Grid) -> SolveResult<Path> {
        traversal::solve(grid, Strategy::BreadthFirst)
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}
