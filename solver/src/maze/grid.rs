use super::{cell::Cell, exploration::Exploration, layout::Maze, position::Position};

/// Snapshot of one cell as seen by a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub position: Position,
    pub cell: Cell,
    pub explored: bool,
    pub discoverer: Option<Position>,
}

/// A maze paired with the exploration state of a single solve.
///
/// The topology is borrowed read-only; everything a traversal writes goes
/// into the owned [`Exploration`] and is cleared by [`Grid::reset`].
#[derive(Debug, Clone)]
pub struct Grid<'m> {
    maze: &'m Maze,
    state: Exploration,
}

impl<'m> Grid<'m> {
    pub fn new(maze: &'m Maze) -> Self {
        Self {
            maze,
            state: Exploration::new(maze.height(), maze.width()),
        }
    }

    pub fn maze(&self) -> &'m Maze {
        self.maze
    }

    pub fn bounds(&self) -> (usize, usize) {
        self.maze.bounds()
    }

    pub fn start_cell(&self) -> Option<Position> {
        self.maze.start()
    }

    pub fn end_cell(&self) -> Option<Position> {
        self.maze.end()
    }

    /// in bounds, not a wall and not yet explored
    pub fn is_valid_cell(&self, pos: Position) -> bool {
        self.maze.is_walkable(pos) && !self.state.is_explored(pos)
    }

    /// [`Grid::is_valid_cell`] for signed coordinates; anything negative is off the grid
    pub fn is_valid_coord(&self, row: isize, col: isize) -> bool {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => self.is_valid_cell(Position::new(row, col)),
            _ => false,
        }
    }

    pub fn get_cell(&self, pos: Position) -> Option<GridCell> {
        let cell = self.maze.get(pos)?;

        Some(GridCell {
            position: pos,
            cell,
            explored: self.state.is_explored(pos),
            discoverer: self.state.discoverer(pos),
        })
    }

    pub fn is_explored(&self, pos: Position) -> bool {
        self.maze.contains(pos) && self.state.is_explored(pos)
    }

    pub fn discoverer(&self, pos: Position) -> Option<Position> {
        if self.maze.contains(pos) {
            self.state.discoverer(pos)
        } else {
            None
        }
    }

    pub fn mark_explored(&mut self, pos: Position) {
        if self.maze.contains(pos) {
            self.state.mark_explored(pos);
        }
    }

    /// Marks `pos` explored and records `by` as its discoverer.
    ///
    /// Returns false when `pos` is off the grid or was already discovered.
    pub fn discover(&mut self, pos: Position, by: Position) -> bool {
        if !self.maze.contains(pos) || !self.state.set_discoverer(pos, by) {
            return false;
        }

        self.state.mark_explored(pos);
        true
    }

    pub fn explored_count(&self) -> usize {
        self.state.explored_count()
    }

    /// true when no cell has a discoverer and only the start cell may be explored
    pub fn is_ready(&self) -> bool {
        self.state.is_pristine(self.start_cell())
    }

    pub fn reset(&mut self) {
        log::trace!("resetting exploration state");
        self.state.reset();
    }
}
