//! Reading and writing the maze text format.
//!
//! ```text
//! 2 0 1
//! 1 0 1
//! 1 0 3
//! ```
//!
//! Each non-blank line is a row of integer cell codes separated by
//! whitespace. Blank lines are ignored. The result is validated by
//! [`Grid::new`], so a loaded grid is always usable for search.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use maze_core::{Grid, InvalidMaze};

/// Errors that can occur when loading a maze.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read or written.
    Io { path: PathBuf, source: io::Error },
    /// A token is not an integer. `line` is 1-based.
    Parse { line: usize, token: String },
    /// The codes parsed but do not form a valid maze.
    Invalid(InvalidMaze),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Parse { line, token } => {
                write!(f, "line {line}: \u{201c}{token}\u{201d} is not a cell code")
            }
            Self::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { .. } => None,
            Self::Invalid(e) => Some(e),
        }
    }
}

impl From<InvalidMaze> for LoadError {
    fn from(e: InvalidMaze) -> Self {
        Self::Invalid(e)
    }
}

/// Parse a maze from its text form.
pub fn parse(text: &str) -> Result<Grid, LoadError> {
    let mut codes: Vec<Vec<i32>> = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>().map_err(|_| LoadError::Parse {
                    line: i + 1,
                    token: tok.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        codes.push(row);
    }
    Ok(Grid::new(&codes)?)
}

/// Read and parse the maze stored at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse(&text)?;
    log::info!(
        "loaded {}x{} maze from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

/// Text form of `grid`, one row per line, with a trailing newline.
pub fn to_text(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() * 2);
    for row in grid.codes() {
        let line: Vec<String> = row.iter().map(i32::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Write `grid` to `path` in text form.
pub fn save(path: impl AsRef<Path>, grid: &Grid) -> Result<(), LoadError> {
    let path = path.as_ref();
    fs::write(path, to_text(grid)).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
