//! Yearly aggregation engine.
//!
//! Combines validation, partitioning, summaries and joins into one pass.

use trend_core::config::AggregationConfig;
use trend_core::{ArticleDataset, Result, SentimentView, TrendConfig, YearlyTable};

use crate::{
    merge::{merge_all, merge_signed},
    partition::partition,
    summary::summarize,
    validate::validate_request,
};

/// Builds the merged yearly table for a term.
#[derive(Debug, Clone, Default)]
pub struct TrendAggregator {
    config: AggregationConfig,
}

impl TrendAggregator {
    /// Create an aggregator from configuration.
    pub fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    /// Aggregate `dataset` for `term`.
    ///
    /// Years with `count <= min_count` are dropped; the rest are sorted
    /// ascending.
    pub fn aggregate(&self, dataset: &ArticleDataset, term: &str) -> Result<YearlyTable> {
        validate_request(dataset, term)?;

        let parts = partition(dataset, term, self.config.positive_threshold)?;
        let yearly_pos = summarize(parts.view(SentimentView::Positive));
        let yearly_neg = summarize(parts.view(SentimentView::Negative));
        let yearly_all = summarize(parts.view(SentimentView::All));

        let signed = merge_signed(&yearly_pos, &yearly_neg);
        let merged = merge_all(&signed, &yearly_all);
        let years_before = merged.len();

        let rows: Vec<_> = merged
            .into_iter()
            .filter(|row| row.count > self.config.min_count)
            .collect();

        tracing::info!(
            term,
            years = years_before,
            kept = rows.len(),
            min_count = self.config.min_count,
            "aggregated yearly sentiment"
        );

        Ok(YearlyTable::new(term, rows))
    }
}

/// Aggregate with a full configuration.
pub fn aggregate_yearly(dataset: &ArticleDataset, term: &str, config: &TrendConfig) -> Result<YearlyTable> {
    TrendAggregator::new(config.aggregation.clone()).aggregate(dataset, term)
}
