use std::time::Duration;

pub struct Config;

impl Config {
    pub const GRID_HEIGHT: usize = 20;
    pub const GRID_WIDTH: usize = 40;

    pub const FRAME_DELAY: Duration = Duration::from_millis(439);

    pub const ALIVE: char = '*';
    pub const EMPTY: char = ' ';
    pub const CORNER: char = 'x';
    pub const HORIZONTAL_EDGE: char = '-';
    pub const VERTICAL_EDGE: char = '|';

    /// Filter used when `RUST_LOG` is unset.
    pub const DEFAULT_LOG_FILTER: &'static str = "warn";
}
