//! Reading occupancy grids from text.
//!
//! A board file has one grid row per line, each a comma separated list of integers such as
//! `0,1,0,0,0,0,`. Zero marks a free cell, any other value an obstacle.
use crate::{cell::CellState, cell_grid::CellGrid};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Parses one grid row. Parsing stops at the first value that is not an integer; the cells
/// read up to that point are kept. The separator after the last value is optional, so a
/// final value without a trailing comma still becomes a cell.
pub fn parse_line(line: &str) -> Vec<CellState> {
    let mut tokens = line.split(',').map(str::trim).peekable();
    let mut parsed = Vec::new();
    while let Some(token) = tokens.next() {
        // A trailing separator leaves one empty token behind.
        if token.is_empty() && tokens.peek().is_none() {
            break;
        }
        match token.parse::<i64>() {
            Ok(value) => parsed.push(CellState::from_value(value)),
            Err(_) => break,
        }
    }
    parsed
}

/// Parses a whole board, one row per line.
pub fn parse_grid(text: &str) -> CellGrid {
    CellGrid::from_rows(text.lines().map(parse_line).collect())
}

/// Reads a board file, reporting I/O failures to the caller.
pub fn read_grid<P: AsRef<Path>>(path: P) -> io::Result<CellGrid> {
    let text = fs::read_to_string(path.as_ref())?;
    let grid = parse_grid(&text);
    debug!(
        "Read {} rows from {}",
        grid.height(),
        path.as_ref().display()
    );
    Ok(grid)
}

/// Reads a board file. A missing or unreadable file yields an empty grid.
pub fn load_grid<P: AsRef<Path>>(path: P) -> CellGrid {
    match read_grid(path.as_ref()) {
        Ok(grid) => grid,
        Err(err) => {
            warn!("Could not read {}: {}", path.as_ref().display(), err);
            CellGrid::default()
        }
    }
}
