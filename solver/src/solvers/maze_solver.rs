use std::time::Instant;

use crate::{
    algorithms::pathfinding::{PathResult, PathfindingAlgorithm},
    error::SolveResult,
    maze::{Grid, Maze},
};

/// Runs one pathfinding algorithm against a maze and measures it.
pub struct MazeSolver<A: PathfindingAlgorithm> {
    algorithm: A,
}

impl<A: PathfindingAlgorithm> MazeSolver<A> {
    pub fn new(algorithm: A) -> Self {
        Self { algorithm }
    }

    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Solves `maze` on a fresh exploration overlay.
    pub fn solve(&self, maze: &Maze) -> SolveResult<PathResult> {
        let mut grid = Grid::new(maze);
        self.solve_grid(&mut grid)
    }

    /// Solves an existing grid, which must be fresh or reset. Its exploration
    /// state is left in place for inspection or rendering.
    pub fn solve_grid(&self, grid: &mut Grid) -> SolveResult<PathResult> {
        let maze = grid.maze();

        log::debug!(
            "{}x{} maze: {:?} → {:?}",
            maze.height(),
            maze.width(),
            grid.start_cell(),
            grid.end_cell()
        );

        let planning_start = Instant::now();
        let path = self.algorithm.find_path(grid)?;
        let planning_time = planning_start.elapsed();

        log::info!(
            "{} found {} cells in {:?}",
            self.algorithm.name(),
            path.len(),
            planning_time
        );

        Ok(PathResult::new(path, grid.explored_count(), planning_time))
    }
}
