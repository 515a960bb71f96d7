use crate::{CellGroup, Error, Result};
use std::{fs::File, io::Read, path::Path};
use tracing::info;

/// Reads a pattern file and checks it against a `height x width` grid.
///
/// See [`parse_cell_group`] for the format. A line that is not valid UTF-8
/// is reported as a parse error of that line.
pub fn load_cell_group(path: impl AsRef<Path>, height: usize, width: usize) -> Result<CellGroup> {
    let path = path.as_ref();
    let file_error = |source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    };
    let mut data = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut data))
        .map_err(file_error)?;
    let group = parse_lines(&data, height, width)?;
    info!(path = %path.display(), cells = group.len(), "pattern loaded");
    Ok(group)
}

/// Parses one `<row> <col>` pair per line, skipping blank lines.
///
/// Anything after the first two numbers on a line is ignored.
pub fn parse_cell_group(data: &str, height: usize, width: usize) -> Result<CellGroup> {
    parse_lines(data.as_bytes(), height, width)
}

fn parse_lines(data: &[u8], height: usize, width: usize) -> Result<CellGroup> {
    let mut group = CellGroup::new();
    for (i, bytes) in data.split(|&b| b == b'\n').enumerate() {
        let parse_error = || Error::Parse {
            line: i + 1,
            content: String::from_utf8_lossy(bytes).trim_end().to_string(),
        };
        let line = std::str::from_utf8(bytes).map_err(|_| parse_error())?;
        if line.trim().is_empty() {
            continue;
        }
        let mut tokens = line.split_whitespace().map(str::parse::<usize>);
        let (row, col) = match (tokens.next(), tokens.next()) {
            (Some(Ok(row)), Some(Ok(col))) => (row, col),
            _ => return Err(parse_error()),
        };
        if row >= height || col >= width {
            return Err(Error::OutOfBounds {
                row,
                col,
                height,
                width,
            });
        }
        group.push((row, col));
    }
    Ok(group)
}
