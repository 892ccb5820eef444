//! Grid maze solving with depth-first and breadth-first search.
//!
//! A [`Maze`](maze::Maze) holds the immutable topology. Each solve runs on a
//! [`Grid`](maze::Grid), which lays a resettable exploration overlay over a
//! borrowed maze, so any number of solves can share one maze.
//!
//! ```
//! use maze_solver::algorithms::pathfinding::{Strategy, solve};
//! use maze_solver::maze::{Grid, Maze};
//!
//! let maze = Maze::parse("S.#\n..E").unwrap();
//! let mut grid = Grid::new(&maze);
//! let path = solve(&mut grid, Strategy::BreadthFirst).unwrap();
//! assert_eq!(path.len(), 4);
//! ```

pub mod algorithms;
pub mod error;
pub mod maze;
pub mod solvers;

pub use error::{SolveError, SolveResult};
