use std::fmt;
use std::ops::Add;

use super::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// the neighbor in `direction`, or None when it falls outside `bounds` (height, width)
    pub fn move_in_direction(self, direction: Direction, bounds: (usize, usize)) -> Option<Self> {
        let (height, width) = bounds;
        (self + direction.offset()).filter(|pos| pos.row < height && pos.col < width)
    }

    /// in-bounds neighbors in probing order: up, right, down, left
    pub fn neighbors(self, bounds: (usize, usize)) -> Vec<(Self, Direction)> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.move_in_direction(dir, bounds).map(|pos| (pos, dir)))
            .collect()
    }

    /// direction of a single orthogonal step from `self` to `other`
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self + dir.offset() == Some(other))
    }
}

impl Add<(isize, isize)> for Position {
    type Output = Option<Self>;

    fn add(self, (dr, dc): (isize, isize)) -> Self::Output {
        let new_row = self.row as isize + dr;
        let new_col = self.col as isize + dc;

        if new_row >= 0 && new_col >= 0 {
            Some(Self::new(new_row as usize, new_col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
