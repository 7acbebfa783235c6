//! Error types for grid construction and simulation

use thiserror::Error;

/// Errors raised by the simulation core
#[derive(Debug, Error)]
pub enum LifeError {
    /// The grid is empty, has a zero dimension or ragged rows
    #[error("invalid grid shape: {reason}")]
    InvalidGridShape { reason: String },

    /// A simulation or construction parameter is out of range
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A cell value other than 0 or 1
    #[error("invalid cell value {value} at ({row}, {col}), expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },

    /// Writing a rendered frame failed
    #[error("failed to write simulation output")]
    Io(#[from] std::io::Error),
}

impl LifeError {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        Self::InvalidGridShape { reason: reason.into() }
    }

    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}
