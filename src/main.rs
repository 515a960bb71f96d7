#![warn(clippy::all)]

use anyhow::Context;
use clap::{error::ErrorKind, Parser};
use std::{convert::Infallible, path::PathBuf, process::ExitCode};
use torus_life::{load_cell_group, Config, DefaultLife, FrameTimer, TerminalDisplay};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Conway's Game of Life on a toroidal grid", long_about = None)]
struct Cli {
    /// File with one `<row> <col>` pair of a live cell per line
    pattern: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match simulate(&cli) {
        Ok(never) => match never {},
        Err(err) => {
            eprintln!("error, {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn simulate(cli: &Cli) -> anyhow::Result<Infallible> {
    let mut life = DefaultLife::new();
    let group = load_cell_group(&cli.pattern, life.height(), life.width())?;
    life.set_cell_group(&group, true)?;

    let mut display = TerminalDisplay::stdout();
    let mut timer = FrameTimer::default();
    torus_life::run(&mut life, &mut display, &mut timer).context("simulation stopped")
}
