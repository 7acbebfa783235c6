//! Simulation driver: silent runs, lazy step iteration and streamed output

pub mod driver;
pub mod options;

pub use driver::{frame_label, run, simulate, steps, stream, Steps};
pub use options::{delay_from_secs, iterations_from, SimulationOptions};
