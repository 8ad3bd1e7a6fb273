// grid.rs - Grid types for Conway's Game of Life

use std::fmt;

use crate::error::GridError;
use crate::patterns::Pattern;

// Relative positions of the 8 cells around a cell
#[rustfmt::skip]
static NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A (row, column) coordinate in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Square N x N board of live/dead cells.
///
/// Cells are stored row-major in one buffer (`row * size + col`). The size
/// is fixed at construction and every accessor checks bounds; anything
/// outside the board reads as dead.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-dead grid with `size` rows and columns.
    pub fn new(size: usize) -> Self {
        Self { size, cells: vec![false; size * size] }
    }

    /// An all-dead grid with `pattern` stamped at `origin`.
    pub fn with_pattern(size: usize, pattern: &Pattern, origin: Cell) -> Self {
        let mut grid = Self::new(size);
        grid.stamp(pattern, origin);
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.size + cell.col)
    }

    fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.size, index % self.size)
    }

    fn out_of_bounds(&self, cell: Cell) -> GridError {
        GridError::OutOfBounds { row: cell.row, col: cell.col, size: self.size }
    }

    /// State of `cell`, or `None` when it is off the board.
    pub fn get(&self, cell: Cell) -> Option<bool> {
        self.index(cell).map(|i| self.cells[i])
    }

    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut bool> {
        let index = self.index(cell)?;
        self.cells.get_mut(index)
    }

    /// `true` only for an in-bounds live cell.
    pub fn is_alive(&self, cell: Cell) -> bool {
        self.get(cell).unwrap_or(false)
    }

    pub fn set(&mut self, cell: Cell, alive: bool) -> Result<(), GridError> {
        let error = self.out_of_bounds(cell);
        let state = self.get_mut(cell).ok_or(error)?;
        *state = alive;
        Ok(())
    }

    /// Flips `cell` and returns its new state.
    pub fn toggle(&mut self, cell: Cell) -> Result<bool, GridError> {
        let error = self.out_of_bounds(cell);
        let state = self.get_mut(cell).ok_or(error)?;
        *state = !*state;
        Ok(*state)
    }

    /// Marks the cells of `pattern` alive, offset by `origin`. Cells that
    /// would land off the board are skipped. Returns how many were placed.
    pub fn stamp(&mut self, pattern: &Pattern, origin: Cell) -> usize {
        let mut placed = 0;
        for &(row, col) in pattern.cells {
            let cell = Cell::new(origin.row + row, origin.col + col);
            if let Some(state) = self.get_mut(cell) {
                *state = true;
                placed += 1;
            }
        }
        placed
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(index, _)| self.cell_at(index))
    }

    /// The in-bounds cells adjacent to `cell`, diagonals included. No
    /// wraparound: corners have 3 neighbours, edges 5, the interior 8.
    pub fn neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        NEIGHBOUR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = cell.row.checked_add_signed(dr)?;
            let col = cell.col.checked_add_signed(dc)?;
            let neighbour = Cell::new(row, col);
            self.contains(neighbour).then_some(neighbour)
        })
    }

    pub fn live_neighbours(&self, cell: Cell) -> usize {
        self.neighbours(cell).filter(|&n| self.is_alive(n)).count()
    }

    /// Iterates every cell with its state, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &alive)| (self.cell_at(index), alive))
    }

    // Replaces the contents with `states`, which must yield size * size values
    pub(crate) fn refill(&mut self, size: usize, states: impl Iterator<Item = bool>) {
        self.size = size;
        self.cells.clear();
        self.cells.extend(states);
        debug_assert_eq!(self.cells.len(), size * size);
    }
}

// One text row per grid row, `#` for live and `.` for dead
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: String = row.iter().map(|&alive| if alive { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.size, self.size)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(5);
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.iter().count(), 25);
    }

    #[test]
    fn storage_is_row_major() {
        let mut grid = Grid::new(3);
        grid.set(Cell::new(1, 2), true).unwrap();
        assert!(grid.cells[5]);
        assert_eq!(grid.to_string(), "...\n..#\n...\n");
    }

    #[test]
    fn accessors_check_bounds() {
        let mut grid = Grid::new(4);
        let outside = Cell::new(4, 0);
        assert_eq!(grid.get(outside), None);
        assert!(!grid.is_alive(outside));
        assert_eq!(
            grid.set(outside, true),
            Err(GridError::OutOfBounds { row: 4, col: 0, size: 4 })
        );
        assert!(grid.toggle(Cell::new(0, 4)).is_err());
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn toggle_flips_state() {
        let mut grid = Grid::new(3);
        let cell = Cell::new(2, 2);
        assert_eq!(grid.toggle(cell), Ok(true));
        assert!(grid.is_alive(cell));
        assert_eq!(grid.toggle(cell), Ok(false));
        assert!(!grid.is_alive(cell));
    }

    #[test]
    fn neighbour_counts_are_clipped_at_edges() {
        let grid = Grid::new(5);
        assert_eq!(grid.neighbours(Cell::new(0, 0)).count(), 3);
        assert_eq!(grid.neighbours(Cell::new(4, 4)).count(), 3);
        assert_eq!(grid.neighbours(Cell::new(0, 4)).count(), 3);
        assert_eq!(grid.neighbours(Cell::new(0, 2)).count(), 5);
        assert_eq!(grid.neighbours(Cell::new(3, 0)).count(), 5);
        assert_eq!(grid.neighbours(Cell::new(2, 2)).count(), 8);
    }

    #[test]
    fn neighbours_never_include_the_cell_itself() {
        let grid = Grid::new(3);
        for (cell, _) in grid.iter() {
            assert!(grid.neighbours(cell).all(|n| n != cell && grid.contains(n)));
        }
    }

    #[test]
    fn one_by_one_grid_has_no_neighbours() {
        let grid = Grid::new(1);
        assert_eq!(grid.neighbours(Cell::new(0, 0)).count(), 0);
    }

    #[test]
    fn live_neighbours_ignores_the_centre() {
        let mut grid = Grid::new(3);
        for (cell, _) in Grid::new(3).iter() {
            grid.set(cell, true).unwrap();
        }
        assert_eq!(grid.live_neighbours(Cell::new(1, 1)), 8);
        assert_eq!(grid.live_neighbours(Cell::new(0, 0)), 3);
        assert_eq!(grid.live_neighbours(Cell::new(0, 1)), 5);
    }

    #[test]
    fn live_cells_are_row_major() {
        let mut grid = Grid::new(4);
        grid.set(Cell::new(3, 0), true).unwrap();
        grid.set(Cell::new(0, 3), true).unwrap();
        grid.set(Cell::new(1, 1), true).unwrap();
        let live: Vec<Cell> = grid.live_cells().collect();
        assert_eq!(live, vec![Cell::new(0, 3), Cell::new(1, 1), Cell::new(3, 0)]);
    }

    #[test]
    fn stamp_clips_to_the_board() {
        let mut grid = Grid::new(4);
        let placed = grid.stamp(&crate::patterns::BLOCK, Cell::new(3, 3));
        assert_eq!(placed, 1);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![Cell::new(3, 3)]);
    }
}
