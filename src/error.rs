use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open pattern file {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A non-empty pattern line that does not start with two non-negative integers.
    #[error("line {line}: expected `<row> <col>`, found {content:?}")]
    Parse { line: usize, content: String },

    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("display error: {0}")]
    Display(#[from] io::Error),
}
