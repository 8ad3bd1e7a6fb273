// render.rs - Turns a grid into surface commands

use crate::config::Config;
use crate::grid::{Cell, Grid};
use crate::surface::{Color, Point, Rect, Surface};

const GRID_LINE_THICKNESS: f32 = 2.0;

/// Pixel geometry of the board, derived once from the [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    window_size: f32,
    cell_size: f32,
    grid_size: usize,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Self {
            window_size: config.window_size() as f32,
            cell_size: config.cell_size() as f32,
            grid_size: config.grid_size(),
        }
    }

    /// Screen area covered by `cell`.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let origin = Point::new(
            cell.col as f32 * self.cell_size,
            cell.row as f32 * self.cell_size,
        );
        Rect::square(origin, self.cell_size)
    }

    /// Draws and presents one full frame: background, live cells, the
    /// hover preview when it sits on a dead cell, then the grid lines.
    pub fn draw(&self, grid: &Grid, preview: Option<Cell>, surface: &mut dyn Surface) {
        surface.clear(Color::BACKGROUND);
        for cell in grid.live_cells() {
            self.fill_cell(cell, surface);
        }
        if let Some(cell) = preview.filter(|&cell| grid.get(cell) == Some(false)) {
            self.fill_cell(cell, surface);
        }
        self.draw_grid_lines(surface);
        surface.present();
    }

    fn fill_cell(&self, cell: Cell, surface: &mut dyn Surface) {
        surface.fill_rect(self.cell_rect(cell), Color::LIVE_CELL);
    }

    // Lines sit one pixel before each cell boundary so the 2px stroke
    // straddles it
    fn draw_grid_lines(&self, surface: &mut dyn Surface) {
        for k in 0..self.grid_size {
            let offset = k as f32 * self.cell_size - 1.0;
            surface.draw_line(
                Point::new(offset, 0.0),
                Point::new(offset, self.window_size),
                Color::GRID_LINE,
                GRID_LINE_THICKNESS,
            );
        }
        for k in 0..self.grid_size {
            let offset = k as f32 * self.cell_size - 1.0;
            surface.draw_line(
                Point::new(0.0, offset),
                Point::new(self.window_size, offset),
                Color::GRID_LINE,
                GRID_LINE_THICKNESS,
            );
        }
    }
}
