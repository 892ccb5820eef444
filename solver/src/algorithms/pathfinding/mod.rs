mod bfs;
mod dfs;
mod frontier;
mod path;
pub mod traits;
mod traversal;

pub use bfs::BFS;
pub use dfs::DFS;
pub use frontier::Frontier;
pub use path::{Path, reconstruct_path};
pub use traits::{PathResult, PathfindingAlgorithm, Strategy};
pub use traversal::solve;
