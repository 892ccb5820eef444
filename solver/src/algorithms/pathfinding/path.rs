use std::slice;

use crate::{
    error::{SolveError, SolveResult},
    maze::{Direction, Grid, Position},
};

/// Ordered cells from start to end, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Position>,
}

impl Path {
    pub fn new(cells: Vec<Position>) -> Self {
        Self { cells }
    }

    pub fn single(pos: Position) -> Self {
        Self::new(vec![pos])
    }

    /// number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// number of moves, one less than the cell count
    pub fn moves(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn iter(&self) -> slice::Iter<'_, Position> {
        self.cells.iter()
    }

    /// every consecutive pair is orthogonally adjacent
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|pair| pair[0].is_adjacent(pair[1]))
    }

    /// moves needed to walk the path; None if two cells are not adjacent
    pub fn directions(&self) -> Option<Vec<Direction>> {
        self.cells
            .windows(2)
            .map(|pair| pair[0].direction_to(pair[1]))
            .collect()
    }

    pub fn into_cells(self) -> Vec<Position> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walks discoverers back from the end cell and returns the path start → end.
///
/// Fails with [`SolveError::NoPathReconstructed`] if the chain stops anywhere
/// but the start cell or runs longer than the grid has cells.
pub fn reconstruct_path(grid: &Grid) -> SolveResult<Path> {
    let start = grid
        .start_cell()
        .ok_or_else(|| SolveError::invalid("grid has no start cell"))?;
    let end = grid
        .end_cell()
        .ok_or_else(|| SolveError::invalid("grid has no end cell"))?;

    let limit = grid.maze().len();
    let mut cells = vec![end];
    let mut current = end;

    while let Some(prev) = grid.discoverer(current) {
        if cells.len() >= limit {
            log::error!("discoverer cycle detected at {}", prev);
            return Err(SolveError::NoPathReconstructed { at: prev });
        }

        cells.push(prev);
        current = prev;
    }

    if current != start {
        log::error!("discoverer chain ended at {} instead of {}", current, start);
        return Err(SolveError::NoPathReconstructed { at: current });
    }

    cells.reverse();
    Ok(Path::new(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;

    #[test]
    fn follows_discoverers_back_to_start() {
        let maze = Maze::parse("S.E").unwrap();
        let mut grid = Grid::new(&maze);
        grid.discover(Position::new(0, 1), Position::new(0, 0));
        grid.discover(Position::new(0, 2), Position::new(0, 1));

        let path = reconstruct_path(&grid).unwrap();

        assert_eq!(
            path.cells(),
            &[Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );
        assert_eq!(path.directions(), Some(vec![Direction::Right, Direction::Right]));
        assert_eq!(path.moves(), 2);
    }

    #[test]
    fn broken_chain_is_reported() {
        let maze = Maze::parse("S..\n..E").unwrap();
        let mut grid = Grid::new(&maze);
        grid.discover(Position::new(1, 2), Position::new(1, 1));

        assert_eq!(
            reconstruct_path(&grid),
            Err(SolveError::NoPathReconstructed {
                at: Position::new(1, 1)
            })
        );
    }

    #[test]
    fn cyclic_chain_is_reported() {
        let maze = Maze::parse("S.\n.E").unwrap();
        let mut grid = Grid::new(&maze);
        let end = Position::new(1, 1);
        let side = Position::new(0, 1);
        grid.discover(end, side);
        grid.discover(side, end);

        assert!(matches!(
            reconstruct_path(&grid),
            Err(SolveError::NoPathReconstructed { .. })
        ));
    }

    #[test]
    fn start_equal_to_end_is_single_cell() {
        let mut maze = Maze::open(2, 2).unwrap();
        maze.set_start(Position::new(1, 0)).unwrap();
        maze.set_end(Position::new(1, 0)).unwrap();
        let grid = Grid::new(&maze);

        assert_eq!(
            reconstruct_path(&grid).unwrap(),
            Path::single(Position::new(1, 0))
        );
    }
}
