// rules.rs - Conway's transition rule and whole-grid evolution

use crate::grid::Grid;

/// Next state of one cell given its current state and live-neighbour count.
pub const fn next_state(alive: bool, live_neighbours: usize) -> bool {
    match (alive, live_neighbours) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

impl Grid {
    /// Writes the next generation into `next`, reading only from `self`.
    ///
    /// `next` is resized to match, so any grid can serve as the scratch
    /// buffer. No cell of `self` changes, so there is no partially updated
    /// state to observe.
    pub fn evolve_into(&self, next: &mut Grid) {
        let states = self
            .iter()
            .map(|(cell, alive)| next_state(alive, self.live_neighbours(cell)));
        next.refill(self.size(), states);
    }

    /// The next generation as a fresh grid.
    pub fn evolve(&self) -> Grid {
        let mut next = Grid::new(self.size());
        self.evolve_into(&mut next);
        next
    }
}
