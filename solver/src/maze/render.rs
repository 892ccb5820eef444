use std::collections::HashSet;

use colored::Colorize;

use crate::algorithms::pathfinding::Path;

use super::{Cell, Grid, Maze, Position};

const PATH_MARK: char = '*';
const EXPLORED_MARK: char = '~';

/// Draws `maze` with the cells of `path` between start and end marked `*`.
pub fn render_solution(maze: &Maze, path: &Path, color: bool) -> String {
    let on_path: HashSet<Position> = path.iter().copied().collect();

    render_with(maze, color, |pos, cell| {
        (cell == Cell::Open && on_path.contains(&pos)).then_some(PATH_MARK)
    })
}

/// Draws the maze behind `grid` with every explored open cell marked `~`.
pub fn render_exploration(grid: &Grid, color: bool) -> String {
    render_with(grid.maze(), color, |pos, cell| {
        (cell == Cell::Open && grid.is_explored(pos)).then_some(EXPLORED_MARK)
    })
}

fn render_with(
    maze: &Maze,
    color: bool,
    overlay: impl Fn(Position, Cell) -> Option<char>,
) -> String {
    let mut out = String::with_capacity(maze.len() + maze.height());

    for (row, cells) in maze.rows().enumerate() {
        for (col, cell) in cells.into_iter().enumerate() {
            let glyph = overlay(Position::new(row, col), cell);
            let text = glyph.unwrap_or_else(|| cell.as_char()).to_string();

            if !color {
                out.push_str(&text);
                continue;
            }

            let painted = match (glyph, cell) {
                (Some(PATH_MARK), _) => text.yellow().bold(),
                (Some(_), _) => text.cyan(),
                (None, Cell::Wall) => text.dimmed(),
                (None, Cell::Start) => text.green().bold(),
                (None, Cell::End) => text.red().bold(),
                (None, Cell::Open) => text.normal(),
            };
            out.push_str(&painted.to_string());
        }
        out.push('\n');
    }

    out
}
