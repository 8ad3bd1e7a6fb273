// surface.rs - Drawing contract between the game and whatever shows it

use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BACKGROUND: Color = Color::rgb(147, 147, 147);
    pub const LIVE_CELL: Color = Color::rgb(255, 255, 0);
    pub const GRID_LINE: Color = Color::rgb(180, 180, 180);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Position in window pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub const fn square(origin: Point, side: f32) -> Self {
        Self::new(origin.x, origin.y, side, side)
    }
}

/// Where frames are drawn. Commands build up a frame; `present` shows it.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: f32);
    fn present(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect(Rect, Color),
    Line { from: Point, to: Point, color: Color, thickness: f32 },
}

/// A [`Surface`] that records commands instead of drawing them.
///
/// Commands accumulate in a pending frame until [`Surface::present`] makes
/// it the visible frame. Immediate-mode painters replay [`visible`] every
/// repaint, and tests inspect it directly.
///
/// [`visible`]: DisplayList::visible
#[derive(Debug, Default)]
pub struct DisplayList {
    pending: Vec<DrawCommand>,
    visible: Vec<DrawCommand>,
    presented: u64,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recently presented frame.
    pub fn visible(&self) -> &[DrawCommand] {
        &self.visible
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Rectangles of the visible frame, in drawing order.
    pub fn filled_rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.visible.iter().filter_map(|command| match *command {
            DrawCommand::FillRect(rect, color) => Some((rect, color)),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, color: Color) {
        // Anything drawn before a clear would be painted over
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.pending.push(DrawCommand::FillRect(rect, color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: f32) {
        self.pending.push(DrawCommand::Line { from, to, color, thickness });
    }

    fn present(&mut self) {
        self.visible = mem::take(&mut self.pending);
        self.presented += 1;
    }
}
