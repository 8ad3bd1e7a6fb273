// input.rs - Input events the game reacts to, independent of any window system

use crate::config::Config;
use crate::grid::Cell;
use crate::surface::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed.
    Quit,
    KeyDown(Key),
    /// Pointer moved to `position`. `focused` is whether the pointer is over
    /// the window, `left_held` whether the left button is down.
    MouseMove { position: Point, focused: bool, left_held: bool },
    MouseDown(MouseButton),
}

impl InputEvent {
    /// Quit and escape end the program from either phase.
    pub fn is_quit(&self) -> bool {
        matches!(self, InputEvent::Quit | InputEvent::KeyDown(Key::Escape))
    }
}

/// Grid cell under a pixel position, or `None` when the position falls
/// outside the board (negative, or in the strip left over when the window
/// is not a multiple of the grid size).
pub fn position_to_cell(config: &Config, position: Point) -> Option<Cell> {
    // NaN fails both comparisons
    if !(position.x >= 0.0 && position.y >= 0.0) {
        return None;
    }
    let cell_size = config.cell_size() as f32;
    let row = (position.y / cell_size).floor() as usize;
    let col = (position.x / cell_size).floor() as usize;
    let size = config.grid_size();
    (row < size && col < size).then_some(Cell::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_pixels_by_floor_division() {
        let config = Config::default();
        assert_eq!(position_to_cell(&config, Point::new(0.0, 0.0)), Some(Cell::new(0, 0)));
        assert_eq!(position_to_cell(&config, Point::new(19.9, 19.9)), Some(Cell::new(0, 0)));
        assert_eq!(position_to_cell(&config, Point::new(20.0, 45.0)), Some(Cell::new(2, 1)));
        assert_eq!(position_to_cell(&config, Point::new(799.0, 799.0)), Some(Cell::new(39, 39)));
    }

    #[test]
    fn positions_off_the_board_map_to_nothing() {
        let config = Config::default();
        assert_eq!(position_to_cell(&config, Point::new(-1.0, 10.0)), None);
        assert_eq!(position_to_cell(&config, Point::new(10.0, 800.0)), None);
        assert_eq!(position_to_cell(&config, Point::new(f32::NAN, 10.0)), None);
    }

    #[test]
    fn remainder_strip_maps_to_nothing() {
        // 45 / 4 = 11px cells, covering 44px
        let config = Config::new(45, 4, 8.0, 60.0).unwrap();
        assert_eq!(position_to_cell(&config, Point::new(43.5, 0.0)), Some(Cell::new(0, 3)));
        assert_eq!(position_to_cell(&config, Point::new(44.0, 0.0)), None);
    }

    #[test]
    fn quit_events() {
        assert!(InputEvent::Quit.is_quit());
        assert!(InputEvent::KeyDown(Key::Escape).is_quit());
        assert!(!InputEvent::KeyDown(Key::Space).is_quit());
        assert!(!InputEvent::MouseDown(MouseButton::Left).is_quit());
    }
}
