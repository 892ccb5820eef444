use std::collections::VecDeque;

use crate::maze::Position;

use super::traits::Strategy;

/// Discovered but not yet visited cells.
///
/// Cells always enter at the back; the strategy picks which end they leave
/// from, so one container serves both depth-first and breadth-first search.
#[derive(Debug)]
pub struct Frontier {
    cells: VecDeque<Position>,
    strategy: Strategy,
}

impl Frontier {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            cells: VecDeque::new(),
            strategy,
        }
    }

    pub fn push(&mut self, pos: Position) {
        self.cells.push_back(pos);
    }

    pub fn pop(&mut self) -> Option<Position> {
        match self.strategy {
            Strategy::DepthFirst => self.cells.pop_back(),
            Strategy::BreadthFirst => self.cells.pop_front(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(strategy: Strategy) -> Frontier {
        let mut frontier = Frontier::new(strategy);
        for col in 0..3 {
            frontier.push(Position::new(0, col));
        }
        frontier
    }

    #[test]
    fn depth_first_pops_newest() {
        let mut frontier = filled(Strategy::DepthFirst);
        assert_eq!(frontier.pop(), Some(Position::new(0, 2)));
        assert_eq!(frontier.pop(), Some(Position::new(0, 1)));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn breadth_first_pops_oldest() {
        let mut frontier = filled(Strategy::BreadthFirst);
        assert_eq!(frontier.pop(), Some(Position::new(0, 0)));
        assert_eq!(frontier.pop(), Some(Position::new(0, 1)));
        assert_eq!(frontier.pop(), Some(Position::new(0, 2)));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_empty());
    }
}
