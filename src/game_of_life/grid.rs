//! Toroidal grid representation for Game of Life

use crate::error::LifeError;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

const NEIGHBOR_OFFSETS: [isize; 3] = [-1, 0, 1];

/// A fixed-size generation of binary cells whose opposite edges are adjacent.
///
/// Grids have no mutators: every generation is built fresh, so a caller that
/// keeps earlier grids keeps the run's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GridRepr", try_from = "GridRepr")]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

/// Serialized form: cells as rows of 0/1
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GridRepr {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<u8>>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(rows: usize, columns: usize) -> Result<Self, LifeError> {
        Self::from_fn(rows, columns, |_, _| false)
    }

    /// Build a grid by evaluating `alive(row, col)` for every cell in row order
    pub fn from_fn<F>(rows: usize, columns: usize, mut alive: F) -> Result<Self, LifeError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        check_dimensions(rows, columns)?;
        let cells = iproduct!(0..rows, 0..columns)
            .map(|(row, col)| alive(row, col))
            .collect();
        Ok(Self { rows, columns, cells })
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, LifeError> {
        let (rows, columns) = rectangular_shape(&cells)?;
        Ok(Self {
            rows,
            columns,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Create a grid from rows of 0/1 values
    pub fn from_bits(bits: Vec<Vec<u8>>) -> Result<Self, LifeError> {
        let (rows, columns) = rectangular_shape(&bits)?;
        let mut cells = Vec::with_capacity(rows * columns);
        for (row, values) in bits.into_iter().enumerate() {
            for (col, value) in values.into_iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => return Err(LifeError::InvalidCell { row, col, value }),
                }
            }
        }
        Ok(Self { rows, columns, cells })
    }

    /// Create a grid with exactly the listed `(row, col)` cells alive
    pub fn with_living(
        rows: usize,
        columns: usize,
        living: &[(usize, usize)],
    ) -> Result<Self, LifeError> {
        check_dimensions(rows, columns)?;
        let mut cells = vec![false; rows * columns];
        for &(row, col) in living {
            if row >= rows || col >= columns {
                return Err(LifeError::parameter(
                    "living",
                    format!("cell ({row}, {col}) is outside a {rows}x{columns} grid"),
                ));
            }
            cells[row * columns + col] = true;
        }
        Ok(Self { rows, columns, cells })
    }

    /// New grid of the same size whose cells are `f(row, col, current)`
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, usize, bool) -> bool,
    {
        let cells = iproduct!(0..self.rows, 0..self.columns)
            .zip(&self.cells)
            .map(|((row, col), &cell)| f(row, col, cell))
            .collect();
        Self {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    /// Get cell value at coordinates; out of range reads as dead
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns && self.cells[self.index(row, col)]
    }

    /// One row of cells, row 0 first
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Iterate over rows in order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.columns)
    }

    /// Count living cells among the 8 wrapped neighbours of `(row, col)`.
    ///
    /// Offsets wrap modulo the grid size, so on grids narrower than 3 cells
    /// the same neighbour (or the cell itself) can be visited more than once
    /// and is counted each time.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        iproduct!(NEIGHBOR_OFFSETS, NEIGHBOR_OFFSETS)
            .filter(|&offset| offset != (0, 0))
            .filter(|&(dr, dc)| {
                let r = wrap(row, dr, self.rows);
                let c = wrap(col, dc, self.columns);
                self.cells[self.index(r, c)]
            })
            .count() as u8
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.rows, 0..self.columns)
            .filter(|&(row, col)| self.get(row, col))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Export as rows of 0/1
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(|&cell| u8::from(cell)).collect())
            .collect()
    }
}

/// Live-neighbour count of column `x`, row `y`
pub fn get_count(grid: &Grid, x: usize, y: usize) -> u8 {
    grid.count_neighbors(y, x)
}

fn wrap(index: usize, delta: isize, len: usize) -> usize {
    (index as isize + delta).rem_euclid(len as isize) as usize
}

fn check_dimensions(rows: usize, columns: usize) -> Result<(), LifeError> {
    if rows == 0 || columns == 0 {
        return Err(LifeError::shape(format!(
            "grid must have at least one row and one column, got {rows}x{columns}"
        )));
    }
    Ok(())
}

fn rectangular_shape<T>(rows: &[Vec<T>]) -> Result<(usize, usize), LifeError> {
    let Some(first) = rows.first() else {
        return Err(LifeError::shape("grid cannot be empty"));
    };
    let columns = first.len();
    check_dimensions(rows.len(), columns)?;

    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != columns) {
        return Err(LifeError::shape(format!(
            "row {} has length {}, expected {}",
            i,
            row.len(),
            columns
        )));
    }
    Ok((rows.len(), columns))
}

impl From<Grid> for GridRepr {
    fn from(grid: Grid) -> Self {
        Self {
            rows: grid.rows,
            columns: grid.columns,
            cells: grid.to_bits(),
        }
    }
}

impl TryFrom<GridRepr> for Grid {
    type Error = LifeError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let grid = Grid::from_bits(repr.cells)?;
        if grid.rows != repr.rows || grid.columns != repr.columns {
            return Err(LifeError::shape(format!(
                "declared {}x{} but cells are {}x{}",
                repr.rows, repr.columns, grid.rows, grid.columns
            )));
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::show_cells(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.iter_rows().count(), 3);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(Grid::new(0, 3), Err(LifeError::InvalidGridShape { .. })));
        assert!(matches!(Grid::new(3, 0), Err(LifeError::InvalidGridShape { .. })));
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.living_count(), 5);
        assert_eq!(grid.row(1), &[false, true, false]);
    }

    #[test]
    fn test_ragged_and_empty_rejected() {
        let ragged = vec![vec![true, false], vec![true]];
        assert!(matches!(
            Grid::from_cells(ragged),
            Err(LifeError::InvalidGridShape { .. })
        ));
        assert!(matches!(
            Grid::from_cells(Vec::new()),
            Err(LifeError::InvalidGridShape { .. })
        ));
        assert!(matches!(
            Grid::from_bits(vec![vec![]]),
            Err(LifeError::InvalidGridShape { .. })
        ));
    }

    #[test]
    fn test_from_bits_rejects_non_binary() {
        let result = Grid::from_bits(vec![vec![0, 1], vec![2, 0]]);
        assert!(matches!(
            result,
            Err(LifeError::InvalidCell { row: 1, col: 0, value: 2 })
        ));
    }

    #[test]
    fn test_with_living() {
        let grid = Grid::with_living(3, 3, &[(0, 0), (2, 1)]).unwrap();
        assert_eq!(grid.living_cells(), vec![(0, 0), (2, 1)]);
        assert!(Grid::with_living(3, 3, &[(3, 0)]).is_err());
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        assert_eq!(grid.count_neighbors(1, 1), 8);
        // Every other cell sees the 7 remaining live cells through the wrap
        assert_eq!(grid.count_neighbors(0, 0), 7);
    }

    #[test]
    fn test_toroidal_wrap() {
        let grid = Grid::with_living(3, 3, &[(0, 0)]).unwrap();
        assert_eq!(get_count(&grid, 2, 2), 1);
        assert_eq!(get_count(&grid, 0, 2), 1);
        assert_eq!(get_count(&grid, 2, 0), 1);
        assert_eq!(get_count(&grid, 0, 0), 0);
    }

    #[test]
    fn test_wrap_on_wide_grid() {
        // x and y are not interchangeable on a non-square grid
        let grid = Grid::with_living(4, 6, &[(0, 5)]).unwrap();
        assert_eq!(get_count(&grid, 0, 3), 1);
        assert_eq!(get_count(&grid, 0, 1), 1);
        assert_eq!(get_count(&grid, 3, 0), 0);
    }

    #[test]
    fn test_single_cell_grid_counts_itself() {
        let grid = Grid::with_living(1, 1, &[(0, 0)]).unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 8);
    }

    #[test]
    fn test_to_bits() {
        let grid = Grid::with_living(2, 3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(grid.to_bits(), vec![vec![0, 1, 0], vec![0, 0, 1]]);
    }

    #[test]
    fn test_json_shape() {
        let grid = Grid::with_living(2, 2, &[(1, 0)]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"{"rows":2,"columns":2,"cells":[[0,0],[1,0]]}"#);

        let parsed: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, grid);

        let mismatched = r#"{"rows":3,"columns":2,"cells":[[0,0],[1,0]]}"#;
        assert!(serde_json::from_str::<Grid>(mismatched).is_err());
    }
}
