//! Validated run parameters

use crate::error::LifeError;
use std::time::Duration;

/// How a run proceeds: how many generations, and whether to stream them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimulationOptions {
    pub iterations: usize,
    pub show_steps: bool,
    pub delay: Duration,
}

impl SimulationOptions {
    /// Silent run of `iterations` generations
    pub fn silent(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    /// Streaming run pausing `delay` after each frame
    pub fn streaming(iterations: usize, delay: Duration) -> Self {
        Self {
            iterations,
            show_steps: true,
            delay,
        }
    }

    /// Build options from untyped values such as config or CLI input
    pub fn from_raw(iterations: i64, show_steps: bool, delay_seconds: f64) -> Result<Self, LifeError> {
        Ok(Self {
            iterations: iterations_from(iterations)?,
            show_steps,
            delay: delay_from_secs(delay_seconds)?,
        })
    }
}

/// Reject negative iteration counts
pub fn iterations_from(iterations: i64) -> Result<usize, LifeError> {
    usize::try_from(iterations).map_err(|_| {
        LifeError::parameter("iterations", format!("must be non-negative, got {iterations}"))
    })
}

/// Convert fractional seconds to a pause, rejecting negative or non-finite values
pub fn delay_from_secs(seconds: f64) -> Result<Duration, LifeError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(LifeError::parameter(
            "delay",
            format!("must be a non-negative number of seconds, got {seconds}"),
        ));
    }
    Duration::try_from_secs_f64(seconds)
        .map_err(|e| LifeError::parameter("delay", e.to_string()))
}
