use std::{fs, path::Path, str::FromStr};

use eyre::WrapErr;

use super::{cell::Cell, direction::Direction, position::Position};

/// Maze topology: walls, dimensions and the start/end markers.
///
/// Solving never mutates a `Maze`; per-solve state lives in
/// [`Exploration`](super::Exploration), so one maze can back any number of
/// [`Grid`](super::Grid)s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    // markers are kept out of the tile vector
    grid: Vec<Cell>,
    width: usize,
    height: usize,
    start: Option<Position>,
    end: Option<Position>,
}

impl Maze {
    /// a wall-free maze without start or end
    pub fn open(height: usize, width: usize) -> eyre::Result<Self> {
        if height == 0 || width == 0 {
            eyre::bail!("invalid shape: expected non-empty maze, got {}x{}", height, width);
        }

        Ok(Self {
            grid: vec![Cell::Open; height * width],
            width,
            height,
            start: None,
            end: None,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read maze file {}", path.display()))?;

        Self::parse(&text).wrap_err_with(|| format!("failed to parse maze file {}", path.display()))
    }

    pub fn parse(text: &str) -> eyre::Result<Self> {
        let rows: Vec<&str> = text
            .trim_end_matches(['\r', '\n'])
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let Some(first) = rows.first() else {
            eyre::bail!("empty maze");
        };

        let width = first.chars().count();
        if width == 0 {
            eyre::bail!("first maze row is empty");
        }

        let mut maze = Self::open(rows.len(), width)?;

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                eyre::bail!(
                    "row {} has width {}, expected {}",
                    row + 1,
                    found,
                    width
                );
            }

            for (col, c) in line.chars().enumerate() {
                let pos = Position::new(row, col);
                let cell = Cell::from_char(c).ok_or_else(|| {
                    eyre::eyre!("unknown character {:?} at row {}, column {}", c, row + 1, col + 1)
                })?;

                match cell {
                    Cell::Start if maze.start.is_some() => {
                        eyre::bail!("second start cell at {}", pos);
                    }
                    Cell::End if maze.end.is_some() => {
                        eyre::bail!("second end cell at {}", pos);
                    }
                    Cell::Start => maze.start = Some(pos),
                    Cell::End => maze.end = Some(pos),
                    Cell::Wall => maze.grid[pos.to_index(width)] = Cell::Wall,
                    Cell::Open => {}
                }
            }
        }

        log::trace!(
            "parsed {}x{} maze, start {:?}, end {:?}",
            maze.height,
            maze.width,
            maze.start,
            maze.end
        );

        Ok(maze)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// number of cells, walls included
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// tile at `pos`; the start marker wins when start and end coincide
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !self.contains(pos) {
            None
        } else if self.start == Some(pos) {
            Some(Cell::Start)
        } else if self.end == Some(pos) {
            Some(Cell::End)
        } else {
            Some(self.grid[pos.to_index(self.width)])
        }
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|cell| cell.is_walkable())
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn set_start(&mut self, pos: Position) -> eyre::Result<()> {
        self.check_marker(pos, "start")?;
        self.start = Some(pos);
        Ok(())
    }

    pub fn set_end(&mut self, pos: Position) -> eyre::Result<()> {
        self.check_marker(pos, "end")?;
        self.end = Some(pos);
        Ok(())
    }

    pub fn set_wall(&mut self, pos: Position) -> eyre::Result<()> {
        match self.get(pos) {
            None => eyre::bail!("wall {} is outside the {}x{} maze", pos, self.height, self.width),
            Some(Cell::Start | Cell::End) => eyre::bail!("cannot wall over marker at {}", pos),
            Some(_) => {
                self.grid[pos.to_index(self.width)] = Cell::Wall;
                Ok(())
            }
        }
    }

    fn check_marker(&self, pos: Position, marker: &str) -> eyre::Result<()> {
        match self.get(pos) {
            None => eyre::bail!(
                "{} {} is outside the {}x{} maze",
                marker,
                pos,
                self.height,
                self.width
            ),
            Some(Cell::Wall) => eyre::bail!("{} {} is a wall", marker, pos),
            Some(_) => Ok(()),
        }
    }

    /// Walkable in-bounds neighbors in probing order.
    ///
    /// Looks at topology only; unlike [`Grid::is_valid_cell`](super::Grid::is_valid_cell)
    /// it ignores exploration state.
    pub fn neighbors(&self, pos: Position) -> Vec<(Position, Direction)> {
        pos.neighbors(self.bounds())
            .into_iter()
            .filter(|(p, _)| self.is_walkable(*p))
            .collect()
    }

    /// tiles row by row, markers included
    pub fn rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (0..self.height).map(move |row| {
            (0..self.width)
                .filter_map(|col| self.get(Position::new(row, col)))
                .collect()
        })
    }
}

impl FromStr for Maze {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
