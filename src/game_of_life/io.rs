//! Reading grids from text

use super::Grid;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a grid from a text file
/// Format: Each line represents a row, with '1' for alive cells and '0' for dead cells
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    parse_grid(&content)
        .with_context(|| format!("Failed to parse grid from file: {}", path.as_ref().display()))
}

/// Parse a grid from its 0/1 text form
pub fn parse_grid(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Grid text is empty or contains no valid rows");
    }

    let mut cells = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        cells.push(row);
    }

    Ok(Grid::from_cells(cells)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid() {
        let grid = parse_grid("010\n101\n010\n").unwrap();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.living_cells(), vec![(0, 1), (1, 0), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_blank_lines_and_padding_ignored() {
        let grid = parse_grid("\n  0110 \n\n0000\n").unwrap();
        assert_eq!((grid.rows(), grid.columns()), (2, 4));
        assert_eq!(grid.living_count(), 2);
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_grid("010\n1X1\n010\n").is_err());
        assert!(parse_grid("").is_err());

        let ragged = parse_grid("010\n11\n010\n").unwrap_err();
        assert!(matches!(
            ragged.downcast_ref::<LifeError>(),
            Some(LifeError::InvalidGridShape { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("glider.txt");
        std::fs::write(&file_path, "00100\n10100\n01100\n00000\n00000\n").unwrap();

        let glider = load_grid_from_file(&file_path).unwrap();
        assert_eq!((glider.rows(), glider.columns()), (5, 5));
        assert_eq!(glider.living_count(), 5);

        assert!(load_grid_from_file(temp_dir.path().join("missing.txt")).is_err());
    }
}
