//! Built-in seed patterns

use super::Grid;
use crate::error::LifeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Well-known starting configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Still life
    Block,
    /// Period-2 oscillator
    Blinker,
    /// Period-2 oscillator
    Beacon,
    /// Spaceship moving one cell diagonally every 4 generations
    Glider,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Block,
        Pattern::Blinker,
        Pattern::Beacon,
        Pattern::Glider,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Block => "block",
            Pattern::Blinker => "blinker",
            Pattern::Beacon => "beacon",
            Pattern::Glider => "glider",
        }
    }

    /// Live cells as `(row, col)` offsets from the pattern's top-left corner
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Pattern::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Pattern::Beacon => &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
            Pattern::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        }
    }

    /// `(rows, columns)` spanned by the pattern
    pub fn bounding_box(self) -> (usize, usize) {
        self.cells()
            .iter()
            .fold((0, 0), |(rows, cols), &(r, c)| (rows.max(r + 1), cols.max(c + 1)))
    }

    /// Place the pattern centred on an otherwise dead grid
    pub fn place(self, rows: usize, columns: usize) -> Result<Grid, LifeError> {
        let (height, width) = self.bounding_box();
        if rows < height || columns < width {
            return Err(LifeError::shape(format!(
                "{} needs at least {}x{}, grid is {}x{}",
                self.name(),
                height,
                width,
                rows,
                columns
            )));
        }

        let top = (rows - height) / 2;
        let left = (columns - width) / 2;
        let living: Vec<_> = self
            .cells()
            .iter()
            .map(|&(r, c)| (top + r, left + c))
            .collect();
        Grid::with_living(rows, columns, &living)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                LifeError::parameter("pattern", format!("unknown pattern '{s}'"))
            })
    }
}
