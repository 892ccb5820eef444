mod cell;
mod direction;
mod exploration;
mod grid;
mod layout;
mod position;
pub mod render;

pub use cell::Cell;
pub use direction::Direction;
pub use exploration::Exploration;
pub use grid::{Grid, GridCell};
pub use layout::Maze;
pub use position::Position;
