//! Trend charts for the sentiment-trends system.
//!
//! This crate provides:
//! - Figure descriptions for the percent-positive and mean-sentiment charts
//! - Built-in styles
//! - An explicit render context owned by the caller
//! - SVG output
//! - `plot_sentiment_trends`, the aggregate-and-plot entry point

pub mod chart;
pub mod context;
pub mod style;
pub mod svg;
pub mod trends;

pub use chart::{Figure, ReferenceLine, Series, YRange};
pub use context::RenderContext;
pub use style::Style;
pub use trends::{plot_sentiment_trends, TrendPlotter};
