//! Configuration structures for the sentiment-trends system.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Style applied when the caller does not name one.
pub const DEFAULT_STYLE: &str = "fivethirtyeight";

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Grouping and filtering configuration.
    pub aggregation: AggregationConfig,
    /// Chart configuration.
    pub plot: PlotConfig,
}

impl TrendConfig {
    /// Parse a JSON document; missing sections fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.aggregation.positive_threshold.is_finite() {
            return Err(Error::config("positive_threshold must be finite"));
        }
        if self.plot.width == 0 || self.plot.height == 0 {
            return Err(Error::config(format!(
                "figure size must be non-zero, got {}x{}",
                self.plot.width, self.plot.height
            )));
        }
        if self.plot.style.trim().is_empty() {
            return Err(Error::config("style name must not be empty"));
        }
        Ok(())
    }
}

/// Grouping and filtering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Years need strictly more than this many articles to be kept.
    pub min_count: u64,
    /// Scores at or above this value count as positive.
    pub positive_threshold: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            min_count: 10,
            positive_threshold: 0.0,
        }
    }
}

/// Chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Named built-in style.
    pub style: String,
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
    /// Line color of the percent-positive series.
    pub perc_pos_color: String,
    /// Line color of the mean-sentiment series.
    pub mean_color: String,
    /// Color of the dashed zero line.
    pub reference_color: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            width: 1200,
            height: 600,
            perc_pos_color: "dodgerblue".to_string(),
            mean_color: "seagreen".to_string(),
            reference_color: "red".to_string(),
        }
    }
}
