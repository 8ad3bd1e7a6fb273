// main.rs - Conway's Game of Life: paint a seed with the mouse, press space to run it

mod cli;
mod ui;

use std::env;
use std::process::ExitCode;

use life::ConfigError;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliError, Command};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Cli(#[from] CliError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("conway", String::as_str);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Cli(e)) => {
            eprintln!("Error: {e}");
            eprintln!("{}", cli::usage(program));
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), AppError> {
    let options = match cli::parse_args(args)? {
        Command::Help => {
            let program = args.first().map_or("conway", String::as_str);
            println!("{}", cli::usage(program));
            return Ok(());
        }
        Command::Run(options) => options,
    };

    let config = options.into_config()?;
    info!(
        window_size = config.window_size(),
        grid_size = config.grid_size(),
        evolution_rate = config.evolution_rate(),
        fps = config.fps(),
        "configuration accepted"
    );

    ui::run(config)?;
    Ok(())
}
