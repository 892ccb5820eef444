mod cli;
mod logging;

use std::path::Path;

use clap::Parser;
use eyre::Result;
use log::{debug, info};

use cli::{Args, Command, PathfindingAlgorithm};
use logging::Logger;
use maze_solver::{
    algorithms::pathfinding::{self, PathResult},
    maze::{Grid, Maze, render},
    solvers::MazeSolver,
};

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity, args.timestamps);

    if args.no_color {
        colored::control::set_override(false);
    }
    let color = !args.no_color;

    match args.command {
        Command::Solve {
            maze,
            algorithm,
            explored,
        } => run_solver(&maze, algorithm, explored, color),
        Command::Benchmark { maze } => run_benchmark(&maze),
    }
}

fn load_maze(path: &Path) -> Result<Maze> {
    info!("loading maze: {}", path.display());
    let maze = Maze::load(path)?;
    debug!("{}x{} maze", maze.height(), maze.width());
    Ok(maze)
}

fn solve(algorithm: PathfindingAlgorithm, grid: &mut Grid) -> Result<PathResult> {
    let result = match algorithm {
        PathfindingAlgorithm::DFS => MazeSolver::new(pathfinding::DFS).solve_grid(grid),
        PathfindingAlgorithm::BFS => MazeSolver::new(pathfinding::BFS).solve_grid(grid),
    };

    Ok(result?)
}

fn run_solver(
    path: &Path,
    algorithm: PathfindingAlgorithm,
    explored: bool,
    color: bool,
) -> Result<()> {
    let maze = load_maze(path)?;
    let mut grid = Grid::new(&maze);

    info!("solving with {}", algorithm.name());
    let result = solve(algorithm, &mut grid)?;

    println!("{}", render::render_solution(&maze, &result.path, color));
    if explored {
        println!("{}", render::render_exploration(&grid, color));
    }

    print_result(&result);
    Ok(())
}

fn run_benchmark(path: &Path) -> Result<()> {
    let maze = load_maze(path)?;
    let mut grid = Grid::new(&maze);

    info!("benchmarking all algorithms");

    let mut completed_results = Vec::new();

    for (i, algorithm) in PathfindingAlgorithm::all().enumerate() {
        info!("testing {}", algorithm.name());

        if i > 0 {
            debug!("resetting grid");
            grid.reset();
        }

        match solve(algorithm, &mut grid) {
            Ok(result) => {
                print_result(&result);
                completed_results.push((algorithm.name(), result));
            }
            Err(e) => {
                log::error!("{} failed: {}", algorithm.name(), e);
            }
        }
    }

    print_benchmark_summary(&completed_results);
    Ok(())
}

fn print_result(result: &PathResult) {
    info!(
        "path of {} cells ({} moves), {} cells explored",
        result.steps(),
        result.path.moves(),
        result.explored
    );
    debug!("planning: {:?}", result.planning_time);

    if let Some(directions) = result.path.directions() {
        let moves: Vec<_> = directions.iter().map(|d| d.as_str()).collect();
        debug!("moves: {}", moves.join(" "));
    }
}

fn print_benchmark_summary(results: &[(&str, PathResult)]) {
    info!("\nbenchmark results:");
    info!(
        "{:<12} {:>8}  {:>10}  {:>12}",
        "algorithm", "cells", "explored", "plan"
    );
    info!("{:-<48}", "");

    for (name, result) in results {
        info!(
            "{:<12} {:>8}  {:>10}  {:>12?}",
            name,
            result.steps(),
            result.explored,
            result.planning_time,
        );
    }

    if let Some((name, result)) = results.iter().min_by_key(|(_, r)| r.steps()) {
        info!("\nshortest: {} ({} cells)", name, result.steps());
    }

    if let Some((name, result)) = results.iter().min_by_key(|(_, r)| r.explored) {
        info!("least explored: {} ({} cells)", name, result.explored);
    }
}
