//! Conway's Game of Life without a window attached.
//!
//! The grid, the transition rule, the evolution timer and the two
//! interaction phases (paint the seed, then watch it evolve) live here.
//! Drawing goes through the [`Surface`] trait and input arrives as
//! [`InputEvent`]s, so a window system only has to translate.

pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod patterns;
pub mod phase;
pub mod render;
pub mod rules;
pub mod surface;
pub mod timer;

pub use config::Config;
pub use error::{ConfigError, GridError};
pub use grid::{Cell, Grid};
pub use input::{InputEvent, Key, MouseButton, position_to_cell};
pub use patterns::Pattern;
pub use phase::{Editor, Evolution, Life, PhaseKind};
pub use render::Renderer;
pub use surface::{Color, DisplayList, DrawCommand, Point, Rect, Surface};
pub use timer::{Clock, EvolutionTimer, FrameLimiter, ManualClock, SystemClock};
