use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tunables for series building and viewport behaviour.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Number of low-pass passes applied to freshly built values.
    pub smoothing_passes: usize,
    /// Factor applied to min/max values before they become axis bounds.
    pub extrema_margin: f64,
    /// Target pixel distance between vertical grid lines.
    pub grid_spacing_px: f64,
    /// Minor grid lines are only emitted when a major cell exceeds this.
    pub minor_grid_min_px: f64,
    /// Wheel delta corresponding to one zoom step.
    pub wheel_notch: f64,
    /// Rubber-band selections with an area at or below this are ignored.
    pub min_select_area_px: f64,
    /// Row selections at or below this width collapse to `Invalid`.
    pub min_selection_rows: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            smoothing_passes: 3,
            extrema_margin: 1.05,
            grid_spacing_px: 50.0,
            minor_grid_min_px: 40.0,
            wheel_notch: 140.0,
            min_select_area_px: 10.0,
            min_selection_rows: 10,
        }
    }
}

impl GraphConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!("Graph config loaded from {:?}", path);
        Ok(config)
    }
}
