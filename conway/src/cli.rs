// cli.rs - Command-line flags

use std::str::FromStr;

use life::{Config, ConfigError};
use thiserror::Error;

pub const DESCRIPTION: &str = "Conway's Game of Life. \
    Set up the grid by clicking and dragging over cells. \
    Start the evolution by pressing space.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value {value:?} for {flag}, expected {expected}")]
    InvalidValue { flag: String, value: String, expected: &'static str },

    #[error("unrecognised argument {0:?}")]
    UnknownArgument(String),
}

/// Raw flag values, not yet validated as a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    pub window_size: u32,
    pub grid_size: usize,
    pub evolution_rate: f64,
    pub fps: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            window_size: Config::DEFAULT_WINDOW_SIZE,
            grid_size: Config::DEFAULT_GRID_SIZE,
            evolution_rate: Config::DEFAULT_EVOLUTION_RATE,
            fps: Config::DEFAULT_FPS,
        }
    }
}

impl Options {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        Config::new(self.window_size, self.grid_size, self.evolution_rate, self.fps)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Run(Options),
    Help,
}

/// Parses `args` (program name first). Flags take their value as the next
/// argument or after `=` on the long form.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut options = Options::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (arg.as_str(), None),
        };
        let mut value = || inline.clone().or_else(|| rest.next().cloned());

        match flag {
            "-h" | "--help" => return Ok(Command::Help),
            "-w" | "--window-size" => {
                options.window_size = parse_value(flag, value(), "a whole number of pixels")?;
            }
            "-g" | "--grid-size" => {
                options.grid_size = parse_value(flag, value(), "a whole number of cells")?;
            }
            "-e" | "--evo-rate" => {
                options.evolution_rate = parse_value(flag, value(), "a number per second")?;
            }
            "-f" | "--fps" => {
                options.fps = parse_value(flag, value(), "a number of frames per second")?;
            }
            other => return Err(CliError::UnknownArgument(other.to_string())),
        }
    }

    Ok(Command::Run(options))
}

fn parse_value<T: FromStr>(
    flag: &str,
    value: Option<String>,
    expected: &'static str,
) -> Result<T, CliError> {
    let value = value.ok_or_else(|| CliError::MissingValue(flag.to_string()))?;
    value.trim().parse().map_err(|_| CliError::InvalidValue {
        flag: flag.to_string(),
        value,
        expected,
    })
}

pub fn usage(program: &str) -> String {
    let defaults = Options::default();
    format!(
        "usage: {program} [-h] [-w N] [-g N] [-e RATE] [-f FPS]\n\
         \n\
         {DESCRIPTION}\n\
         \n\
         options:\n  \
           -h, --help         show this help message and exit\n  \
           -w, --window-size  Width and height of the window. (default: {})\n  \
           -g, --grid-size    Number of rows and columns of cells in the grid. (default: {})\n  \
           -e, --evo-rate     Number of times per second that the system evolves. (default: {})\n  \
           -f, --fps          Maximum frame rate. (default: {})",
        defaults.window_size, defaults.grid_size, defaults.evolution_rate, defaults.fps,
    )
}
