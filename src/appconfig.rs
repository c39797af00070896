use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::forward::constants::{
    DEFAULT_ACCELERATION_FACTOR, DEFAULT_HORIZON_YEARS, PLOT_YEARS_AFTER_CROSSING,
};
use crate::forward::ModelParams;

pub const DEFAULT_CHART_FILENAME: &str = "co2_trajectory.svg";

/// Configuration options for the app
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct AppConfig {
    #[builder(default)]
    pub model: ModelParams,

    #[builder(default)]
    pub run: RunOptions,
}

/// Options for a single estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default)]
#[serde(default)]
pub struct RunOptions {
    /// Number of years to model (default 1000)
    pub horizon_years: u32,
    /// Emissions growth rate in the first year, decaying afterwards (default 0.01)
    pub acceleration_factor: f64,
    /// Where the chart is written (default co2_trajectory.svg)
    pub chart_path: PathBuf,
    /// Years drawn past the crossing year (default 20)
    pub plot_years_after_crossing: usize,
    /// Set to false to skip the chart
    pub draw_chart: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            horizon_years: DEFAULT_HORIZON_YEARS,
            acceleration_factor: DEFAULT_ACCELERATION_FACTOR,
            chart_path: PathBuf::from(DEFAULT_CHART_FILENAME),
            plot_years_after_crossing: PLOT_YEARS_AFTER_CROSSING,
            draw_chart: true,
        }
    }
}

impl AppConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw_toml = std::fs::read_to_string(path)
            .with_context(|| format!("reading configuration from {}", path.display()))?;
        let config = toml::from_str(raw_toml.as_str())
            .with_context(|| format!("parsing configuration in {}", path.display()))?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}
