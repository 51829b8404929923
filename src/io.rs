use crate::grid::{Grid, ParseError};
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("given digits conflict in a row, column, or box")]
    Inconsistent,
}

/// Parse a puzzle from text: comma-separated rows if any comma is present,
/// otherwise 81 digits/dots. Conflicting givens are rejected here, before
/// the solver ever sees the grid.
pub fn grid_from_text(text: &str) -> Result<Grid, LoadError> {
    let grid = if text.contains(',') { Grid::from_csv(text)? } else { Grid::from_compact(text)? };
    if !grid.is_consistent() { return Err(LoadError::Inconsistent); }
    Ok(grid)
}

pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    grid_from_text(&text)
}

pub fn read_grid(reader: &mut impl Read) -> Result<Grid, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    grid_from_text(&text)
}

/// Write the grid as nine comma-separated rows.
pub fn write_grid(path: impl AsRef<Path>, grid: &Grid) -> std::io::Result<()> {
    fs::write(path, grid.to_csv())
}
