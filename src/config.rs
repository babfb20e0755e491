//! JSON loading for chart configuration and series data.

use std::path::Path;

use eyre::{Result, WrapErr};

use crate::data_types::{DataPoint, FilterChartConfig};

impl FilterChartConfig {
    /// Parses a configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid filter chart configuration")
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize filter chart configuration")
    }
}

/// Parses a JSON array of `{ "value": .., "result": .. }` objects
/// (`"results"` is accepted for the y field).
pub fn load_series_json(json: &str) -> Result<Vec<DataPoint>> {
    serde_json::from_str(json).wrap_err("invalid series data")
}

pub fn load_series_file(path: impl AsRef<Path>) -> Result<Vec<DataPoint>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read series file {}", path.display()))?;
    load_series_json(&text).wrap_err_with(|| format!("in {}", path.display()))
}
