//! Splitting a term's rows into sentiment views.

use trend_core::{ArticleDataset, Result, SentimentView};
use trend_ingestion::{bucket_rows, BucketedScore};

/// Year-bucketed scores of one term, split by sign.
#[derive(Debug, Clone, Default)]
pub struct Partitions {
    /// Scores at or above the positive threshold.
    pub positive: Vec<BucketedScore>,
    /// Scores below the positive threshold.
    pub negative: Vec<BucketedScore>,
    /// Every scored row.
    pub all: Vec<BucketedScore>,
}

impl Partitions {
    /// Scores of one view.
    pub fn view(&self, view: SentimentView) -> &[BucketedScore] {
        match view {
            SentimentView::Positive => &self.positive,
            SentimentView::Negative => &self.negative,
            SentimentView::All => &self.all,
        }
    }
}

/// Select the rows matching `term` (case-insensitive) and split them.
///
/// Rows with a `NaN` score carry no sentiment and are left out of every view.
/// Fails on the first matching row whose date has no derivable year.
pub fn partition(dataset: &ArticleDataset, term: &str, positive_threshold: f64) -> Result<Partitions> {
    let matching = dataset
        .iter()
        .enumerate()
        .filter(|(_, record)| record.matches(term));
    let scored = bucket_rows(matching)?;

    let mut parts = Partitions::default();
    let mut unscored = 0usize;
    for s in scored {
        if s.score.is_nan() {
            unscored += 1;
            continue;
        }
        if s.score >= positive_threshold {
            parts.positive.push(s);
        } else {
            parts.negative.push(s);
        }
        parts.all.push(s);
    }

    if unscored > 0 {
        tracing::debug!(term, unscored, "skipped rows without a score");
    }
    tracing::debug!(
        term,
        positive = parts.positive.len(),
        negative = parts.negative.len(),
        all = parts.all.len(),
        "partitioned rows"
    );
    Ok(parts)
}
