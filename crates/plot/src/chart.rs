//! Figure descriptions for the two trend charts.
//!
//! A [`Figure`] is plain data: categories, series and axis settings. Turning
//! it into pixels is the renderer's job.

use ordered_float::OrderedFloat;
use serde::Serialize;
use std::path::Path;
use trend_core::config::PlotConfig;
use trend_core::{Result, YearlyTable};

use crate::style::Style;
use crate::svg::render_svg;

/// Fraction of the data span added above and below an auto-scaled axis.
const AUTO_PADDING: f64 = 0.05;

/// Y-axis range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum YRange {
    /// Fixed bounds.
    Fixed { min: f64, max: f64 },
    /// Fit the data and the reference line.
    Auto,
}

/// Horizontal reference line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub y: f64,
    pub color: String,
    pub width: f64,
    pub dashed: bool,
}

impl ReferenceLine {
    /// Thin dashed line at zero.
    pub fn zero(color: impl Into<String>) -> Self {
        Self {
            y: 0.0,
            color: color.into(),
            width: 1.0,
            dashed: true,
        }
    }
}

/// One line series, aligned with the figure's categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub color: String,
    pub values: Vec<f64>,
}

/// A single chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Categorical x values in plotting order.
    pub categories: Vec<String>,
    pub y_range: YRange,
    pub reference: ReferenceLine,
    pub series: Vec<Series>,
    /// Size in pixels.
    pub width: u32,
    pub height: u32,
}

impl Figure {
    /// Share of positive articles per year, y fixed to `[0, 1]`.
    pub fn percent_positive(table: &YearlyTable, term: &str, config: &PlotConfig) -> Self {
        Self {
            title: format!("Percent Positive {term} Articles"),
            x_label: "Year".to_string(),
            y_label: format!("% {term} Articles Positive"),
            categories: table.years(),
            y_range: YRange::Fixed { min: 0.0, max: 1.0 },
            reference: ReferenceLine::zero(&config.reference_color),
            series: vec![Series {
                label: "Percent Positive Articles".to_string(),
                color: config.perc_pos_color.clone(),
                values: table.perc_pos(),
            }],
            width: config.width,
            height: config.height,
        }
    }

    /// Mean sentiment of all articles per year, y auto-scaled.
    pub fn mean_sentiment(table: &YearlyTable, term: &str, config: &PlotConfig) -> Self {
        Self {
            title: format!("Average {term} Article Sentiment"),
            x_label: "Year".to_string(),
            y_label: format!("Average {term} Sentiment"),
            categories: table.years(),
            y_range: YRange::Auto,
            reference: ReferenceLine::zero(&config.reference_color),
            series: vec![Series {
                label: "Mean".to_string(),
                color: config.mean_color.clone(),
                values: table.means(),
            }],
            width: config.width,
            height: config.height,
        }
    }

    /// Resolved `(min, max)` of the y axis; `min < max` always holds.
    pub fn y_bounds(&self) -> (f64, f64) {
        match self.y_range {
            YRange::Fixed { min, max } => (min, max),
            YRange::Auto => {
                let values = self
                    .series
                    .iter()
                    .flat_map(|s| s.values.iter().copied())
                    .chain(std::iter::once(self.reference.y))
                    .filter(|v| v.is_finite())
                    .map(OrderedFloat);

                let (lo, hi) = values.fold(
                    (None::<OrderedFloat<f64>>, None::<OrderedFloat<f64>>),
                    |(lo, hi), v| {
                        (
                            Some(lo.map_or(v, |l| l.min(v))),
                            Some(hi.map_or(v, |h| h.max(v))),
                        )
                    },
                );

                match (lo, hi) {
                    (Some(lo), Some(hi)) if hi > lo => {
                        let pad = (hi.0 - lo.0) * AUTO_PADDING;
                        (lo.0 - pad, hi.0 + pad)
                    }
                    (Some(v), _) => (v.0 - 1.0, v.0 + 1.0),
                    _ => (-1.0, 1.0),
                }
            }
        }
    }

    /// Render to an SVG document.
    pub fn to_svg(&self, style: &Style) -> String {
        render_svg(self, style)
    }

    /// Render and write to `path`.
    pub fn save_svg(&self, path: impl AsRef<Path>, style: &Style) -> Result<()> {
        std::fs::write(path, self.to_svg(style))?;
        Ok(())
    }

    /// Figure description as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use trend_core::{YearBucket, YearlyRow};

    fn row(year: u16, mean: f64, perc_pos: f64) -> YearlyRow {
        YearlyRow {
            group_date: YearBucket::new(year).unwrap(),
            min_pos: 0.1,
            max_pos: 0.9,
            mean_pos: 0.5,
            count_pos: Some(8),
            min_neg: -0.9,
            max_neg: -0.1,
            mean_neg: -0.5,
            count_neg: Some(4),
            min: -0.9,
            max: 0.9,
            mean,
            count: 12,
            perc_pos,
        }
    }

    fn table() -> YearlyTable {
        YearlyTable::new("flu", vec![row(2019, 0.2, 0.6), row(2020, 0.6, 0.75)])
    }

    #[test]
    fn test_percent_positive_figure() {
        let fig = Figure::percent_positive(&table(), "flu", &PlotConfig::default());

        assert_eq!(fig.title, "Percent Positive flu Articles");
        assert!(fig.y_label.contains("flu"));
        assert_eq!(fig.categories, vec!["2019", "2020"]);
        assert_eq!(fig.y_bounds(), (0.0, 1.0));
        assert_eq!(fig.series[0].values, vec![0.6, 0.75]);
        assert_eq!(fig.series[0].color, "dodgerblue");
        assert!(fig.reference.dashed);
        assert_eq!(fig.reference.y, 0.0);
    }

    #[test]
    fn test_mean_figure_auto_bounds_include_zero() {
        let fig = Figure::mean_sentiment(&table(), "flu", &PlotConfig::default());

        assert_eq!(fig.title, "Average flu Article Sentiment");
        assert_eq!(fig.y_range, YRange::Auto);

        // Data spans 0.2..0.6, zero line extends it to 0.0..0.6
        let (lo, hi) = fig.y_bounds();
        assert_relative_eq!(lo, -0.03, epsilon = 1e-12);
        assert_relative_eq!(hi, 0.63, epsilon = 1e-12);
    }

    #[test]
    fn test_auto_bounds_empty_table() {
        let empty = YearlyTable::new("flu", vec![]);
        let fig = Figure::mean_sentiment(&empty, "flu", &PlotConfig::default());
        assert!(fig.categories.is_empty());
        assert_eq!(fig.y_bounds(), (-1.0, 1.0));
    }

    #[test]
    fn test_to_json() {
        let fig = Figure::percent_positive(&table(), "flu", &PlotConfig::default());
        let json = fig.to_json().unwrap();
        assert!(json.contains("\"Percent Positive Articles\""));
        assert!(json.contains("\"Fixed\""));
    }
}
