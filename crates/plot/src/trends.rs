//! Yearly sentiment trends: aggregate, then chart.

use trend_aggregate::TrendAggregator;
use trend_core::config::AggregationConfig;
use trend_core::{ArticleDataset, Result, TrendConfig, YearlyTable};

use crate::chart::Figure;
use crate::context::RenderContext;

/// Aggregates a term's articles by year and draws the two trend charts.
#[derive(Debug, Clone, Default)]
pub struct TrendPlotter {
    aggregator: TrendAggregator,
}

impl TrendPlotter {
    /// Create a plotter with the given aggregation settings.
    pub fn new(config: AggregationConfig) -> Self {
        Self {
            aggregator: TrendAggregator::new(config),
        }
    }

    /// Create a plotter from a full configuration.
    pub fn from_config(config: &TrendConfig) -> Self {
        Self::new(config.aggregation.clone())
    }

    /// Build the yearly table for `term` and add two figures to `ctx`:
    /// percent positive per year, then mean sentiment per year.
    ///
    /// Nothing is drawn if the request is rejected.
    pub fn run(&self, dataset: &ArticleDataset, term: &str, ctx: &mut RenderContext) -> Result<YearlyTable> {
        let table = self.aggregator.aggregate(dataset, term)?;

        let percent = Figure::percent_positive(&table, term, ctx.config());
        let mean = Figure::mean_sentiment(&table, term, ctx.config());
        ctx.push_figure(percent);
        ctx.push_figure(mean);

        tracing::info!(term, years = table.len(), style = ctx.style().name, "plotted sentiment trends");
        Ok(table)
    }
}

/// Aggregate `dataset` by year for `term`, draw both trend charts into `ctx`
/// and return the yearly table.
pub fn plot_sentiment_trends(
    dataset: &ArticleDataset,
    term: &str,
    ctx: &mut RenderContext,
) -> Result<YearlyTable> {
    TrendPlotter::default().run(dataset, term, ctx)
}
