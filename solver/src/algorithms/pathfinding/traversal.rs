use crate::{
    error::{SolveError, SolveResult},
    maze::{Grid, Position},
};

use super::{
    frontier::Frontier,
    path::{Path, reconstruct_path},
    traits::Strategy,
};

/// Explores `grid` from its start cell until the end cell is visited, then
/// rebuilds the path from the recorded discoverers.
///
/// Neighbors are probed up, right, down, left. A cell is marked explored and
/// given its discoverer the moment it is pushed onto the frontier, so no cell
/// is queued twice and breadth-first search yields a shortest path.
pub fn solve(grid: &mut Grid, strategy: Strategy) -> SolveResult<Path> {
    let (start, end) = check_ready(grid)?;

    if start == end {
        log::debug!("start and end coincide at {}", start);
        return Ok(Path::single(start));
    }

    // the start cell is never pushed, so flag it here to keep it from being
    // rediscovered by its own neighbors
    grid.mark_explored(start);

    let mut frontier = Frontier::new(strategy);
    let mut current = start;
    let mut visited = 0usize;

    log::trace!("{} search from {} to {}", strategy, start, end);

    while current != end {
        for (neighbor, direction) in current.neighbors(grid.bounds()) {
            if grid.is_valid_cell(neighbor) && grid.discover(neighbor, current) {
                log::trace!("{} discovered {} going {}", current, neighbor, direction);
                frontier.push(neighbor);
            }
        }

        current = frontier.pop().ok_or_else(|| {
            log::debug!(
                "{} search exhausted after visiting {} cells",
                strategy,
                visited
            );
            SolveError::NoSolutionFound
        })?;
        visited += 1;
    }

    log::debug!(
        "{} search reached {} after visiting {} cells ({} still queued)",
        strategy,
        end,
        visited,
        frontier.len()
    );

    reconstruct_path(grid)
}

fn check_ready(grid: &Grid) -> SolveResult<(Position, Position)> {
    let start = grid
        .start_cell()
        .ok_or_else(|| SolveError::invalid("grid has no start cell"))?;
    let end = grid
        .end_cell()
        .ok_or_else(|| SolveError::invalid("grid has no end cell"))?;

    if !grid.is_ready() {
        return Err(SolveError::invalid(
            "grid holds exploration state from a previous solve; reset it first",
        ));
    }

    Ok((start, end))
}
