use crate::{error::SolveResult, maze::Grid};

use super::{
    path::Path,
    traits::{PathfindingAlgorithm, Strategy},
    traversal,
};

#[allow(clippy::upper_case_acronyms)]
pub struct DFS;

impl PathfindingAlgorithm for DFS {
    fn find_path(&self, grid: &mut Grid) -> SolveResult<Path> {
        traversal::solve(grid, Strategy::DepthFirst)
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}
