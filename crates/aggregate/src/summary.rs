//! Per-year summary statistics.

use std::collections::BTreeMap;
use trend_core::{BucketSummary, YearBucket};
use trend_ingestion::BucketedScore;

/// Running min / max / mean / count of scores.
#[derive(Debug, Clone, Copy)]
pub struct SummaryAccumulator {
    min: f64,
    max: f64,
    sum: f64,
    count: u64,
}

impl Default for SummaryAccumulator {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            count: 0,
        }
    }
}

impl SummaryAccumulator {
    /// Add a score.
    pub fn add(&mut self, score: f64) {
        self.min = self.min.min(score);
        self.max = self.max.max(score);
        self.sum += score;
        self.count += 1;
    }

    /// Finished summary, `None` if nothing was added.
    pub fn finish(&self) -> Option<BucketSummary> {
        if self.count == 0 {
            return None;
        }
        Some(BucketSummary {
            min: self.min,
            max: self.max,
            mean: self.sum / self.count as f64,
            count: self.count,
        })
    }
}

/// Group scores by year and summarise each year.
pub fn summarize(scores: &[BucketedScore]) -> BTreeMap<YearBucket, BucketSummary> {
    let mut groups: BTreeMap<YearBucket, SummaryAccumulator> = BTreeMap::new();
    for s in scores {
        groups.entry(s.bucket).or_default().add(s.score);
    }

    groups
        .into_iter()
        .filter_map(|(bucket, acc)| acc.finish().map(|summary| (bucket, summary)))
        .collect()
}
