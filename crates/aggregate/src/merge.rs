//! Outer joins of the per-year summaries.

use std::collections::{BTreeMap, BTreeSet};
use trend_core::{BucketSummary, YearBucket, YearlyRow};

/// Positive and negative summaries of one year, joined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignedSummary {
    pub group_date: YearBucket,
    pub positive: Option<BucketSummary>,
    pub negative: Option<BucketSummary>,
    /// Share of positive articles, `1.0` when undefined.
    pub perc_pos: f64,
}

/// `count_pos / (count_pos + count_neg)`, a missing side counting as zero.
///
/// Defaults to `1.0` when both sides are empty.
pub fn perc_pos(count_pos: Option<u64>, count_neg: Option<u64>) -> f64 {
    let pos = count_pos.unwrap_or(0);
    let total = pos + count_neg.unwrap_or(0);
    if total == 0 {
        1.0
    } else {
        pos as f64 / total as f64
    }
}

/// Outer join of the positive and negative summaries on year.
pub fn merge_signed(
    positive: &BTreeMap<YearBucket, BucketSummary>,
    negative: &BTreeMap<YearBucket, BucketSummary>,
) -> BTreeMap<YearBucket, SignedSummary> {
    let years: BTreeSet<YearBucket> = positive.keys().chain(negative.keys()).copied().collect();

    years
        .into_iter()
        .map(|year| {
            let pos = positive.get(&year).copied();
            let neg = negative.get(&year).copied();
            let signed = SignedSummary {
                group_date: year,
                positive: pos,
                negative: neg,
                perc_pos: perc_pos(pos.map(|s| s.count), neg.map(|s| s.count)),
            };
            (year, signed)
        })
        .collect()
}

/// Outer join of the signed summaries with the all-articles summary.
///
/// A year with no all-articles summary has no count and can never pass the
/// count filter, so it is not emitted.
pub fn merge_all(
    signed: &BTreeMap<YearBucket, SignedSummary>,
    all: &BTreeMap<YearBucket, BucketSummary>,
) -> Vec<YearlyRow> {
    let years: BTreeSet<YearBucket> = signed.keys().chain(all.keys()).copied().collect();

    years
        .into_iter()
        .filter_map(|year| {
            let total = all.get(&year)?;
            let side = signed.get(&year);
            let pos = side.and_then(|s| s.positive);
            let neg = side.and_then(|s| s.negative);

            Some(YearlyRow {
                group_date: year,
                min_pos: pos.map_or(f64::NAN, |s| s.min),
                max_pos: pos.map_or(f64::NAN, |s| s.max),
                mean_pos: pos.map_or(f64::NAN, |s| s.mean),
                count_pos: pos.map(|s| s.count),
                min_neg: neg.map_or(f64::NAN, |s| s.min),
                max_neg: neg.map_or(f64::NAN, |s| s.max),
                mean_neg: neg.map_or(f64::NAN, |s| s.mean),
                count_neg: neg.map(|s| s.count),
                min: total.min,
                max: total.max,
                mean: total.mean,
                count: total.count,
                perc_pos: side.map_or(1.0, |s| s.perc_pos),
            })
        })
        .collect()
}
