// config.rs - Window, grid and timing settings fixed at startup

use std::time::Duration;

use tracing::warn;

use crate::error::ConfigError;

/// Immutable settings for one run of the game.
///
/// Built through [`Config::new`], which rejects values that would make the
/// geometry or the timers degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    window_size: u32,
    grid_size: usize,
    cell_size: u32,
    evolution_rate: f64,
    fps: f64,
    evolution_interval: Duration,
    frame_interval: Duration,
}

impl Config {
    pub const DEFAULT_WINDOW_SIZE: u32 = 800;
    pub const DEFAULT_GRID_SIZE: usize = 40;
    pub const DEFAULT_EVOLUTION_RATE: f64 = 8.0;
    pub const DEFAULT_FPS: f64 = 60.0;

    pub fn new(
        window_size: u32,
        grid_size: usize,
        evolution_rate: f64,
        fps: f64,
    ) -> Result<Self, ConfigError> {
        if grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let cells_across = u32::try_from(grid_size)
            .ok()
            .filter(|&n| n <= window_size)
            .ok_or(ConfigError::CellTooSmall { window_size, grid_size })?;
        let cell_size = window_size / cells_across;

        let evolution_interval = interval(evolution_rate)
            .ok_or(ConfigError::InvalidEvolutionRate(evolution_rate))?;
        let frame_interval = interval(fps).ok_or(ConfigError::InvalidFps(fps))?;

        let remainder = window_size % cells_across;
        if remainder != 0 {
            warn!(
                window_size,
                grid_size,
                cell_size,
                remainder,
                "window size is not a multiple of grid size, leaving an unused strip"
            );
        }

        Ok(Self {
            window_size,
            grid_size,
            cell_size,
            evolution_rate,
            fps,
            evolution_interval,
            frame_interval,
        })
    }

    /// Width and height of the window in pixels.
    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    /// Number of rows (and columns) in the grid.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Side of one cell in pixels, `window_size / grid_size` rounded down.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn evolution_rate(&self) -> f64 {
        self.evolution_rate
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Minimum time between two generations.
    pub fn evolution_interval(&self) -> Duration {
        self.evolution_interval
    }

    /// Minimum time between two rendered frames.
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_size: Self::DEFAULT_WINDOW_SIZE,
            grid_size: Self::DEFAULT_GRID_SIZE,
            cell_size: Self::DEFAULT_WINDOW_SIZE / Self::DEFAULT_GRID_SIZE as u32,
            evolution_rate: Self::DEFAULT_EVOLUTION_RATE,
            fps: Self::DEFAULT_FPS,
            evolution_interval: Duration::from_millis(125),
            frame_interval: Duration::from_secs_f64(Self::DEFAULT_FPS.recip()),
        }
    }
}

/// `1 / rate` seconds, or `None` when the rate is not a usable positive number.
fn interval(rate: f64) -> Option<Duration> {
    if !(rate.is_finite() && rate > 0.0) {
        return None;
    }
    Duration::try_from_secs_f64(rate.recip()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_command_line_defaults() {
        let built = Config::new(800, 40, 8.0, 60.0).unwrap();
        assert_eq!(Config::default(), built);
        assert_eq!(built.cell_size(), 20);
        assert_eq!(built.evolution_interval(), Duration::from_millis(125));
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(Config::new(800, 0, 8.0, 60.0), Err(ConfigError::EmptyGrid));
    }

    #[test]
    fn rejects_zero_pixel_cells() {
        assert_eq!(
            Config::new(30, 40, 8.0, 60.0),
            Err(ConfigError::CellTooSmall { window_size: 30, grid_size: 40 })
        );
    }

    #[test]
    fn one_pixel_cells_are_allowed() {
        let config = Config::new(40, 40, 8.0, 60.0).unwrap();
        assert_eq!(config.cell_size(), 1);
    }

    #[test]
    fn uneven_window_rounds_cell_size_down() {
        let config = Config::new(810, 40, 8.0, 60.0).unwrap();
        assert_eq!(config.cell_size(), 20);
        assert_eq!(config.window_size(), 810);
    }

    #[test]
    fn rejects_unusable_rates() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Config::new(800, 40, rate, 60.0),
                Err(ConfigError::InvalidEvolutionRate(_))
            ));
            assert!(matches!(
                Config::new(800, 40, 8.0, rate),
                Err(ConfigError::InvalidFps(_))
            ));
        }
    }

    #[test]
    fn fractional_rates_are_accepted() {
        let config = Config::new(800, 40, 0.5, 30.0).unwrap();
        assert_eq!(config.evolution_interval(), Duration::from_secs(2));
    }
}
