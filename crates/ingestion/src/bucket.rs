//! Year bucketing of article rows.
//!
//! Every row that enters an aggregation gets a year key. A date whose year
//! cannot be derived is an error carrying the row index.

use trend_core::{ArticleRecord, Error, Result, YearBucket};

/// A score tagged with its source row and year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketedScore {
    /// Zero-based row index in the input dataset.
    pub row: usize,
    /// Year key.
    pub bucket: YearBucket,
    /// Sentiment score.
    pub score: f64,
}

/// Year bucket of one row.
pub fn year_bucket(row: usize, record: &ArticleRecord) -> Result<YearBucket> {
    record
        .clean_date
        .year()
        .ok_or_else(|| Error::date_parse(row, record.clean_date.to_string()))
}

/// Bucket a sequence of `(row index, record)` pairs.
///
/// Stops at the first malformed date.
pub fn bucket_rows<'a, I>(rows: I) -> Result<Vec<BucketedScore>>
where
    I: IntoIterator<Item = (usize, &'a ArticleRecord)>,
{
    rows.into_iter()
        .map(|(row, record)| {
            Ok(BucketedScore {
                row,
                bucket: year_bucket(row, record)?,
                score: record.abs_scores,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_rows() {
        let records = vec![
            ArticleRecord::new("flu", 0.5, "2020-01-01"),
            ArticleRecord::new("flu", -0.5, "2019-12-31"),
        ];
        let scores = bucket_rows(records.iter().enumerate()).unwrap();

        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].bucket.to_string(), "2020");
        assert_eq!(scores[1].bucket.to_string(), "2019");
        assert_eq!(scores[1].row, 1);
    }

    #[test]
    fn test_malformed_date_reports_row() {
        let records = vec![
            ArticleRecord::new("flu", 0.5, "2020-01-01"),
            ArticleRecord::new("flu", 0.5, "01/02/2020"),
        ];
        let err = bucket_rows(records.iter().enumerate()).unwrap_err();

        match err {
            Error::DateParse { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "01/02/2020");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
