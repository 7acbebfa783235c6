//! Running a grid forward for a fixed number of generations

use super::SimulationOptions;
use crate::error::LifeError;
use crate::game_of_life::{tick, Grid};
use crate::utils::show_cells;
use std::io::Write;
use std::iter::FusedIterator;
use std::time::Duration;
use tracing::{debug, trace};

/// Apply `iterations` generations and return the last one
pub fn simulate(initial: Grid, iterations: usize) -> Grid {
    steps(initial, iterations).into_final()
}

/// Lazily walk `iterations` generations.
///
/// Yields `(n, grid)` for `n` in `1..=iterations`, where `grid` is the state
/// *before* the n-th update.
pub fn steps(initial: Grid, iterations: usize) -> Steps {
    Steps {
        current: initial,
        completed: 0,
        total: iterations,
    }
}

/// Iterator returned by [`steps`]
#[derive(Debug, Clone)]
pub struct Steps {
    current: Grid,
    completed: usize,
    total: usize,
}

impl Steps {
    /// The grid the next call to `next` will yield, or the final grid once exhausted
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Run any remaining generations and return the final grid
    pub fn into_final(mut self) -> Grid {
        while self.next().is_some() {}
        self.current
    }
}

impl Iterator for Steps {
    type Item = (usize, Grid);

    fn next(&mut self) -> Option<Self::Item> {
        if self.completed == self.total {
            return None;
        }
        self.completed += 1;
        let next = tick(&self.current);
        let shown = std::mem::replace(&mut self.current, next);
        Some((self.completed, shown))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.completed;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Steps {}

impl FusedIterator for Steps {}

/// Header line printed before each streamed frame
pub fn frame_label(iteration: usize, iterations: usize) -> String {
    format!("iteration {iteration} of {iterations}:")
}

/// Stream every generation to `out`, pausing `delay` after each update.
///
/// Each frame is the label, the pre-update grid and a blank line. Write
/// failures abort the run and are returned to the caller.
pub fn stream<W: Write + ?Sized>(
    initial: Grid,
    iterations: usize,
    delay: Duration,
    out: &mut W,
) -> Result<(), LifeError> {
    let mut cells = initial;
    for iteration in 1..=iterations {
        trace!(iteration, "rendering step");
        writeln!(out, "{}", frame_label(iteration, iterations))?;
        writeln!(out, "{}\n", show_cells(&cells))?;
        out.flush()?;

        trace!(iteration, "stepping");
        cells = tick(&cells);

        if !delay.is_zero() {
            trace!(iteration, ?delay, "pausing");
            std::thread::sleep(delay);
        }
    }
    debug!(iterations, living = cells.living_count(), "stream finished");
    Ok(())
}

/// Single entry point covering both modes.
///
/// Returns `Some(final grid)` for a silent run and `None` when the
/// generations were streamed to `out`.
pub fn run<W: Write + ?Sized>(
    initial: Grid,
    options: &SimulationOptions,
    out: &mut W,
) -> Result<Option<Grid>, LifeError> {
    debug!(
        rows = initial.rows(),
        columns = initial.columns(),
        iterations = options.iterations,
        show_steps = options.show_steps,
        "starting simulation"
    );

    if options.show_steps {
        stream(initial, options.iterations, options.delay, out)?;
        return Ok(None);
    }

    let last = simulate(initial, options.iterations);
    debug!(living = last.living_count(), "simulation finished");
    Ok(Some(last))
}
