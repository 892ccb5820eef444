use super::position::Position;

/// Per-solve state laid over a maze: explored flags and the discoverer of
/// every reached cell, both indexed by flattened position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    explored: Vec<bool>,
    discoverers: Vec<Option<Position>>,
    width: usize,
}

impl Exploration {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            explored: vec![false; height * width],
            discoverers: vec![None; height * width],
            width,
        }
    }

    /// flattened index of `pos`, None when it lies outside the overlay
    fn index(&self, pos: Position) -> Option<usize> {
        let idx = pos.to_index(self.width);
        (pos.col < self.width && idx < self.explored.len()).then_some(idx)
    }

    pub fn is_explored(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|idx| self.explored[idx])
    }

    pub fn mark_explored(&mut self, pos: Position) {
        if let Some(idx) = self.index(pos) {
            self.explored[idx] = true;
        }
    }

    pub fn discoverer(&self, pos: Position) -> Option<Position> {
        self.index(pos).and_then(|idx| self.discoverers[idx])
    }

    /// Records `by` as the discoverer of `pos`.
    ///
    /// The first writer wins: returns false and leaves the entry untouched
    /// when `pos` already has a discoverer or lies outside the overlay.
    pub fn set_discoverer(&mut self, pos: Position, by: Position) -> bool {
        match self.index(pos) {
            Some(idx) if self.discoverers[idx].is_none() => {
                self.discoverers[idx] = Some(by);
                true
            }
            _ => false,
        }
    }

    pub fn explored_count(&self) -> usize {
        self.explored.iter().filter(|&&flag| flag).count()
    }

    /// True when no cell carries exploration state, except that `start` may
    /// already be flagged explored. A discoverer on `start` still counts.
    pub fn is_pristine(&self, start: Option<Position>) -> bool {
        let skip = start.and_then(|pos| self.index(pos));

        let discoverers_clear = self.discoverers.iter().all(Option::is_none);
        let explored_clear = self
            .explored
            .iter()
            .enumerate()
            .all(|(idx, &explored)| !explored || Some(idx) == skip);

        discoverers_clear && explored_clear
    }

    pub fn reset(&mut self) {
        self.explored.fill(false);
        self.discoverers.fill(None);
    }
}
