//! Configuration settings for the simulator

use crate::error::LifeError;
use crate::game_of_life::{load_grid_from_file, random_cells, random_cells_seeded, zero_cells, Grid, Pattern};
use crate::simulation::SimulationOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub grid: GridConfig,
    pub output: OutputConfig,
}

/// Run parameters, kept signed/fractional as written so they can be validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub iterations: i64,
    pub show_steps: bool,
    pub delay_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
    pub initial: InitialState,
    /// Seed for `initial: random`; a fresh entropy source is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Where generation 0 comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitialState {
    Random,
    Empty,
    Pattern { name: Pattern },
    /// 0/1 text file; its own dimensions override `rows`/`columns`
    File { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                iterations: 10,
                show_steps: false,
                delay_seconds: 0.0,
            },
            grid: GridConfig {
                rows: 10,
                columns: 10,
                initial: InitialState::Random,
                seed: None,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        self.simulation_options()?;

        match &self.grid.initial {
            InitialState::File { path } => {
                if !path.exists() {
                    anyhow::bail!("Initial grid file does not exist: {}", path.display());
                }
            }
            _ => {
                if self.grid.rows == 0 || self.grid.columns == 0 {
                    return Err(LifeError::InvalidGridShape {
                        reason: format!(
                            "grid must be at least 1x1, got {}x{}",
                            self.grid.rows, self.grid.columns
                        ),
                    }
                    .into());
                }
            }
        }

        Ok(())
    }

    /// Typed run parameters
    pub fn simulation_options(&self) -> Result<SimulationOptions, LifeError> {
        SimulationOptions::from_raw(
            self.simulation.iterations,
            self.simulation.show_steps,
            self.simulation.delay_seconds,
        )
    }

    /// Produce generation 0
    pub fn initial_grid(&self) -> Result<Grid> {
        let GridConfig { rows, columns, .. } = self.grid;
        let grid = match &self.grid.initial {
            InitialState::Random => match self.grid.seed {
                Some(seed) => random_cells_seeded(rows, columns, seed)?,
                None => random_cells(rows, columns, &mut rand::rng())?,
            },
            InitialState::Empty => zero_cells(rows, columns)?,
            InitialState::Pattern { name } => name.place(rows, columns)?,
            InitialState::File { path } => load_grid_from_file(path)?,
        };
        debug!(
            rows = grid.rows(),
            columns = grid.columns(),
            living = grid.living_count(),
            "initial grid ready"
        );
        Ok(grid)
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(iterations) = cli_overrides.iterations {
            self.simulation.iterations = iterations;
        }
        if cli_overrides.show_steps {
            self.simulation.show_steps = true;
        }
        if let Some(delay) = cli_overrides.delay_seconds {
            self.simulation.delay_seconds = delay;
        }
        if let Some(rows) = cli_overrides.rows {
            self.grid.rows = rows;
        }
        if let Some(columns) = cli_overrides.columns {
            self.grid.columns = columns;
        }
        if let Some(seed) = cli_overrides.seed {
            self.grid.seed = Some(seed);
        }
        if let Some(pattern) = cli_overrides.pattern {
            self.grid.initial = InitialState::Pattern { name: pattern };
        }
        if let Some(ref input) = cli_overrides.input {
            self.grid.initial = InitialState::File { path: input.clone() };
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub iterations: Option<i64>,
    pub show_steps: bool,
    pub delay_seconds: Option<f64>,
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub seed: Option<u64>,
    pub pattern: Option<Pattern>,
    pub input: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.simulation_options().unwrap(), SimulationOptions::silent(10));
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.grid.initial = InitialState::Pattern { name: Pattern::Glider };
        settings.grid.seed = Some(7);
        settings.to_file(&path).unwrap();

        assert_eq!(Settings::from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
simulation:
  iterations: 3
  show_steps: true
  delay_seconds: 0.5
grid:
  rows: 6
  columns: 8
  initial:
    kind: pattern
    name: blinker
output:
  format: json
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            settings.simulation_options().unwrap(),
            SimulationOptions::streaming(3, Duration::from_millis(500))
        );
        assert_eq!(settings.output.format, OutputFormat::Json);

        let grid = settings.initial_grid().unwrap();
        assert_eq!((grid.rows(), grid.columns()), (6, 8));
        assert_eq!(grid.living_count(), 3);
    }

    #[test]
    fn test_negative_parameters_rejected() {
        let mut settings = Settings::default();
        settings.simulation.iterations = -2;
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LifeError>(),
            Some(LifeError::InvalidParameter { name: "iterations", .. })
        ));

        let mut settings = Settings::default();
        settings.simulation.delay_seconds = -1.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_rows_rejected() {
        let mut settings = Settings::default();
        settings.grid.rows = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_seeded_initial_grid_is_stable() {
        let mut settings = Settings::default();
        settings.grid.seed = Some(99);
        assert_eq!(settings.initial_grid().unwrap(), settings.initial_grid().unwrap());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            iterations: Some(4),
            show_steps: true,
            delay_seconds: Some(0.1),
            rows: Some(3),
            pattern: Some(Pattern::Block),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.simulation.iterations, 4);
        assert!(settings.simulation.show_steps);
        assert_eq!(settings.grid.rows, 3);
        assert_eq!(settings.grid.columns, 10);
        assert_eq!(settings.grid.initial, InitialState::Pattern { name: Pattern::Block });
        assert_eq!(settings.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_input_file_overrides_pattern() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            pattern: Some(Pattern::Glider),
            input: Some(PathBuf::from("grid.txt")),
            ..Default::default()
        });
        assert_eq!(
            settings.grid.initial,
            InitialState::File { path: PathBuf::from("grid.txt") }
        );
        assert!(settings.validate().is_err());
    }
}
