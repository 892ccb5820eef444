use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "maze-solver")]
#[command(about = "Grid maze solver with depth-first and breadth-first search")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Prefix log lines with a local timestamp
    #[arg(short, long)]
    pub timestamps: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a maze with one algorithm and print the path
    Solve {
        /// Maze file ('#' wall, '.' or ' ' open, 'S' start, 'E' end)
        maze: PathBuf,

        /// Pathfinding algorithm to use
        #[arg(value_enum)]
        algorithm: PathfindingAlgorithm,

        /// Also print the cells the search explored
        #[arg(short, long)]
        explored: bool,
    },

    /// Run every algorithm on the same maze and compare them
    Benchmark {
        /// Maze file to benchmark against
        maze: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PathfindingAlgorithm {
    /// Depth-First Search
    #[value(name = "dfs")]
    #[allow(clippy::upper_case_acronyms)]
    DFS,

    /// Breadth-First Search, shortest path in cells
    #[value(name = "bfs")]
    #[allow(clippy::upper_case_acronyms)]
    BFS,
}

impl PathfindingAlgorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::DFS, Self::BFS].into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DFS => "DFS",
            Self::BFS => "BFS",
        }
    }
}
