//! Core data types for the sentiment-trends system.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::Error;

/// Publication date of an article.
///
/// Either an already-parsed calendar date or the raw text as it came from the
/// source table. Text dates are expected to start with a 4-digit year followed
/// by `-` (e.g. `2020-03-14` or `2020-03-14 08:00:00`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CleanDate {
    /// Parsed calendar date.
    Date(NaiveDate),
    /// Unparsed date-like text.
    Text(String),
}

impl CleanDate {
    /// Year component, if one can be derived.
    ///
    /// For text dates this is the segment before the first `-`, which must be
    /// exactly four ASCII digits.
    pub fn year(&self) -> Option<YearBucket> {
        match self {
            CleanDate::Date(date) => u16::try_from(date.year()).ok().and_then(YearBucket::new),
            CleanDate::Text(text) => {
                let head = text.split('-').next().unwrap_or_default();
                if head.len() != 4 || !head.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                head.parse().ok().and_then(YearBucket::new)
            }
        }
    }
}

impl fmt::Display for CleanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanDate::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            CleanDate::Text(text) => f.write_str(text),
        }
    }
}

impl From<NaiveDate> for CleanDate {
    fn from(date: NaiveDate) -> Self {
        CleanDate::Date(date)
    }
}

impl From<&str> for CleanDate {
    fn from(text: &str) -> Self {
        CleanDate::Text(text.to_string())
    }
}

impl From<String> for CleanDate {
    fn from(text: String) -> Self {
        CleanDate::Text(text)
    }
}

/// A single sentiment-scored article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Disease label the article was collected for.
    pub disease: String,
    /// Signed sentiment score.
    pub abs_scores: f64,
    /// Publication date.
    #[serde(rename = "Clean_Date")]
    pub clean_date: CleanDate,
}

impl ArticleRecord {
    /// Create a new record.
    pub fn new(disease: impl Into<String>, abs_scores: f64, clean_date: impl Into<CleanDate>) -> Self {
        Self {
            disease: disease.into(),
            abs_scores,
            clean_date: clean_date.into(),
        }
    }

    /// Case-insensitive match against a disease term.
    #[inline]
    pub fn matches(&self, term: &str) -> bool {
        self.disease.to_lowercase() == term.to_lowercase()
    }
}

/// Read-only table of article records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleDataset {
    records: Vec<ArticleRecord>,
}

impl ArticleDataset {
    /// Create a dataset from records.
    pub fn new(records: Vec<ArticleRecord>) -> Self {
        Self { records }
    }

    /// All records in input order.
    pub fn records(&self) -> &[ArticleRecord] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has zero rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records.
    pub fn iter(&self) -> std::slice::Iter<'_, ArticleRecord> {
        self.records.iter()
    }

    /// Distinct disease labels as stored, in order of first appearance.
    pub fn distinct_diseases(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.disease.as_str())
            .filter(|d| seen.insert(*d))
            .collect()
    }
}

impl FromIterator<ArticleRecord> for ArticleDataset {
    fn from_iter<I: IntoIterator<Item = ArticleRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ArticleDataset {
    type Item = &'a ArticleRecord;
    type IntoIter = std::slice::Iter<'a, ArticleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Year key that rows are grouped under.
///
/// Displays as a zero-padded 4-digit year, so string order and numeric order
/// agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearBucket(u16);

impl YearBucket {
    /// Create a bucket for a year in `0..=9999`.
    pub fn new(year: u16) -> Option<Self> {
        (year <= 9999).then_some(Self(year))
    }

    /// Numeric year.
    #[inline]
    pub fn year(self) -> u16 {
        self.0
    }
}

impl fmt::Display for YearBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl TryFrom<String> for YearBucket {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CleanDate::Text(value.clone())
            .year()
            .ok_or_else(|| Error::data(format!("invalid year bucket {value:?}")))
    }
}

impl From<YearBucket> for String {
    fn from(bucket: YearBucket) -> Self {
        bucket.to_string()
    }
}

/// Summary statistics of `abs_scores` within one year bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    /// Smallest score.
    pub min: f64,
    /// Largest score.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Number of scored rows.
    pub count: u64,
}

/// Which slice of a term's articles a summary covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentView {
    /// Scores at or above the positive threshold.
    Positive,
    /// Scores below the positive threshold.
    Negative,
    /// Every scored row.
    All,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_year() {
        let date = CleanDate::from("2020-03-14");
        assert_eq!(date.year().map(YearBucket::year), Some(2020));

        let with_time = CleanDate::from("1999-12-31 23:59:59");
        assert_eq!(with_time.year().map(YearBucket::year), Some(1999));

        // Bare year with no separator still has a 4-digit head
        assert_eq!(CleanDate::from("2008").year().map(YearBucket::year), Some(2008));
    }

    #[test]
    fn test_malformed_text_year() {
        assert!(CleanDate::from("14/03/2020").year().is_none());
        assert!(CleanDate::from("20-03-14").year().is_none());
        assert!(CleanDate::from("").year().is_none());
        assert!(CleanDate::from(" 2020-01-01").year().is_none());
        assert!(CleanDate::from("NaT").year().is_none());
    }

    #[test]
    fn test_parsed_date_year() {
        let date = CleanDate::from(NaiveDate::from_ymd_opt(2017, 6, 1).unwrap());
        assert_eq!(date.year().map(YearBucket::year), Some(2017));
        assert_eq!(date.to_string(), "2017-06-01");
    }

    #[test]
    fn test_year_bucket_display_and_order() {
        let early = YearBucket::new(987).unwrap();
        let late = YearBucket::new(2020).unwrap();
        assert_eq!(early.to_string(), "0987");
        assert!(early < late);
        assert!(early.to_string() < late.to_string());
        assert!(YearBucket::new(10000).is_none());
    }

    #[test]
    fn test_record_matches_case_insensitive() {
        let record = ArticleRecord::new("Influenza", 0.4, "2020-01-01");
        assert!(record.matches("influenza"));
        assert!(record.matches("INFLUENZA"));
        assert!(!record.matches("flu"));
    }

    #[test]
    fn test_distinct_diseases_first_appearance() {
        let dataset: ArticleDataset = vec![
            ArticleRecord::new("measles", 0.1, "2020-01-01"),
            ArticleRecord::new("flu", -0.1, "2020-01-01"),
            ArticleRecord::new("measles", 0.3, "2021-01-01"),
            ArticleRecord::new("Flu", 0.2, "2021-01-01"),
        ]
        .into_iter()
        .collect();

        assert_eq!(dataset.distinct_diseases(), vec!["measles", "flu", "Flu"]);
    }

    #[test]
    fn test_clean_date_deserialize() {
        let date: CleanDate = serde_json::from_str("\"2019-04-02\"").unwrap();
        assert!(matches!(date, CleanDate::Date(_)));

        let text: CleanDate = serde_json::from_str("\"2019-xx\"").unwrap();
        assert_eq!(text, CleanDate::Text("2019-xx".to_string()));
        assert_eq!(text.year().map(YearBucket::year), Some(2019));
    }
}
