mod display;
mod error;
mod frame;
mod grid;
mod pattern;
mod simulation;
mod utils;

pub use display::{DisplayDriver, TerminalDisplay};
pub use error::{Error, Result};
pub use frame::Frame;
pub use grid::{CellGroup, GameOfLife};
pub use pattern::{load_cell_group, parse_cell_group};
pub use simulation::run;
pub use utils::{Config, FrameTimer};

/// Grid used by the command line tool.
pub type DefaultLife = GameOfLife<{ Config::GRID_HEIGHT }, { Config::GRID_WIDTH }>;
