use pretty_assertions::assert_eq;

use maze_solver::{
    SolveError,
    algorithms::pathfinding::{BFS, DFS, Path, PathfindingAlgorithm, Strategy, solve},
    maze::{Grid, Maze, Position},
    solvers::MazeSolver,
};

const CLASSIC: &str = include_str!("../mazes/classic.txt");
const OPEN: &str = include_str!("../mazes/open.txt");
const SPIRAL: &str = include_str!("../mazes/spiral.txt");
const WALLED: &str = include_str!("../mazes/walled.txt");

const STRATEGIES: [Strategy; 2] = [Strategy::DepthFirst, Strategy::BreadthFirst];

fn solve_fresh(maze: &Maze, strategy: Strategy) -> Result<Path, SolveError> {
    let mut grid = Grid::new(maze);
    solve(&mut grid, strategy)
}

fn assert_valid_path(maze: &Maze, path: &Path) {
    assert_eq!(path.start(), maze.start());
    assert_eq!(path.end(), maze.end());
    assert!(path.is_contiguous(), "path has a jump: {:?}", path);
    assert!(path.iter().all(|&pos| maze.is_walkable(pos)));
}

/// shortest simple path in cells, found by trying every simple path
fn shortest_simple_path(maze: &Maze) -> Option<usize> {
    fn walk(maze: &Maze, pos: Position, seen: &mut Vec<Position>, best: &mut Option<usize>) {
        if Some(pos) == maze.end() {
            *best = Some(best.map_or(seen.len(), |b| b.min(seen.len())));
            return;
        }

        for (next, _) in maze.neighbors(pos) {
            if !seen.contains(&next) {
                seen.push(next);
                walk(maze, next, seen, best);
                seen.pop();
            }
        }
    }

    let start = maze.start()?;
    let mut best = None;
    walk(maze, start, &mut vec![start], &mut best);
    best
}

/// every wall layout of a `height`x`width` maze with start top-left and end bottom-right
fn all_layouts(height: usize, width: usize) -> impl Iterator<Item = Maze> {
    let cells = height * width;
    let free = cells - 2;

    (0u32..1 << free).map(move |mask| {
        let mut maze = Maze::open(height, width).unwrap();
        maze.set_start(Position::new(0, 0)).unwrap();
        maze.set_end(Position::new(height - 1, width - 1)).unwrap();

        for bit in 0..free {
            if mask & (1 << bit) != 0 {
                maze.set_wall(Position::from_index(bit + 1, width)).unwrap();
            }
        }

        maze
    })
}

#[test]
fn open_grid_breadth_first_path() {
    let maze = Maze::parse(OPEN).unwrap();
    let path = solve_fresh(&maze, Strategy::BreadthFirst).unwrap();

    assert_eq!(path.len(), 5);
    assert_eq!(
        path.cells(),
        &[
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 2),
            Position::new(2, 2),
        ]
    );
}

#[test]
fn classic_maze_both_strategies() {
    let maze = Maze::parse(CLASSIC).unwrap();

    let dfs = solve_fresh(&maze, Strategy::DepthFirst).unwrap();
    let bfs = solve_fresh(&maze, Strategy::BreadthFirst).unwrap();

    assert_valid_path(&maze, &dfs);
    assert_valid_path(&maze, &bfs);
    assert_eq!(dfs.len(), 17);
    assert_eq!(bfs.len(), 13);
}

#[test]
fn spiral_maze_explored_counts() {
    let maze = Maze::parse(SPIRAL).unwrap();

    let dfs = MazeSolver::new(DFS).solve(&maze).unwrap();
    let bfs = MazeSolver::new(BFS).solve(&maze).unwrap();

    assert_eq!(dfs.steps(), 36);
    assert_eq!(bfs.steps(), 36);
    assert_eq!(dfs.explored, 39);
    assert_eq!(bfs.explored, 44);
}

#[test]
fn walled_in_end_has_no_solution() {
    let maze = Maze::parse(WALLED).unwrap();

    for strategy in STRATEGIES {
        assert_eq!(
            solve_fresh(&maze, strategy),
            Err(SolveError::NoSolutionFound)
        );
    }
}

#[test]
fn start_equal_to_end_needs_no_traversal() {
    let mut maze = Maze::open(3, 3).unwrap();
    maze.set_start(Position::new(1, 1)).unwrap();
    maze.set_end(Position::new(1, 1)).unwrap();

    for strategy in STRATEGIES {
        let mut grid = Grid::new(&maze);
        let path = solve(&mut grid, strategy).unwrap();

        assert_eq!(path.cells(), &[Position::new(1, 1)]);
        assert_eq!(grid.explored_count(), 0);
    }
}

#[test]
fn reset_then_solve_is_deterministic() {
    let maze = Maze::parse(CLASSIC).unwrap();
    let mut grid = Grid::new(&maze);

    for algorithm in [&DFS as &dyn PathfindingAlgorithm, &BFS] {
        let first = algorithm.find_path(&mut grid).unwrap();
        let explored = grid.explored_count();
        grid.reset();

        let second = algorithm.find_path(&mut grid).unwrap();
        assert_eq!(first, second, "{} differs after reset", algorithm.name());
        assert_eq!(grid.explored_count(), explored);
        grid.reset();
    }
}

#[test]
fn solving_without_reset_is_rejected() {
    let maze = Maze::parse(OPEN).unwrap();
    let mut grid = Grid::new(&maze);
    solve(&mut grid, Strategy::BreadthFirst).unwrap();

    assert!(matches!(
        solve(&mut grid, Strategy::DepthFirst),
        Err(SolveError::InvalidGridState(_))
    ));
}

#[test]
fn missing_start_is_rejected_before_traversal() {
    let maze = Maze::parse("...\n..E").unwrap();
    let mut grid = Grid::new(&maze);

    assert!(matches!(
        solve(&mut grid, Strategy::DepthFirst),
        Err(SolveError::InvalidGridState(_))
    ));
    assert_eq!(grid.explored_count(), 0);
}

#[test]
fn every_small_layout_agrees_with_exhaustive_search() {
    for maze in all_layouts(3, 4) {
        let expected = shortest_simple_path(&maze);
        let dfs = solve_fresh(&maze, Strategy::DepthFirst);
        let bfs = solve_fresh(&maze, Strategy::BreadthFirst);

        match expected {
            Some(shortest) => {
                let dfs = dfs.unwrap();
                let bfs = bfs.unwrap();

                assert_valid_path(&maze, &dfs);
                assert_valid_path(&maze, &bfs);
                assert_eq!(bfs.len(), shortest, "bfs not shortest in {:?}", maze);
                assert!(dfs.len() >= bfs.len());
            }
            None => {
                assert_eq!(dfs, Err(SolveError::NoSolutionFound));
                assert_eq!(bfs, Err(SolveError::NoSolutionFound));
            }
        }
    }
}

#[test]
fn path_directions_walk_from_start_to_end() {
    let maze = Maze::parse(CLASSIC).unwrap();
    let path = solve_fresh(&maze, Strategy::BreadthFirst).unwrap();
    let directions = path.directions().unwrap();

    assert_eq!(directions.len(), path.moves());

    let bounds = maze.bounds();
    let end = directions
        .into_iter()
        .try_fold(path.start().unwrap(), |pos, dir| {
            pos.move_in_direction(dir, bounds)
        });
    assert_eq!(end, maze.end());
}
