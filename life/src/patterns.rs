// patterns.rs - Well-known seed patterns, as cell offsets from a top-left origin

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// 2x2 still life.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

/// Period-2 oscillator, horizontal phase.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

/// Vertical phase of [`BLINKER`].
pub const BLINKER_VERTICAL: Pattern = Pattern {
    name: "Blinker (vertical)",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_have_no_duplicate_cells() {
        for pattern in [&BLOCK, &BLINKER, &BLINKER_VERTICAL, &GLIDER, &TOAD, &BEACON] {
            let mut cells = pattern.cells.to_vec();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }
}
