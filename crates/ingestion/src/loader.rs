//! Loading article records.
//!
//! CSV input needs the `disease`, `abs_scores` and `Clean_Date` columns;
//! any other column is ignored.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use trend_core::{ArticleDataset, ArticleRecord, CleanDate, Error, Result};

/// Row layout of the article CSV.
#[derive(Debug, Deserialize)]
struct CsvArticle {
    disease: String,
    abs_scores: f64,
    #[serde(rename = "Clean_Date")]
    clean_date: String,
}

impl From<CsvArticle> for ArticleRecord {
    fn from(row: CsvArticle) -> Self {
        ArticleRecord {
            disease: row.disease,
            abs_scores: row.abs_scores,
            clean_date: parse_clean_date(&row.clean_date),
        }
    }
}

/// Normalise a date string.
///
/// `YYYY-MM-DD` and `YYYY-MM-DD HH:MM:SS` (or `T`-separated) become
/// [`CleanDate::Date`]; anything else is kept as text, without surrounding
/// whitespace.
pub fn parse_clean_date(raw: &str) -> CleanDate {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return CleanDate::Date(date);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return CleanDate::Date(ts.date());
        }
    }
    CleanDate::Text(trimmed.to_string())
}

/// Read records from any CSV source with a header row.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<ArticleDataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut records: Vec<ArticleRecord> = Vec::new();
    for row in rdr.deserialize::<CsvArticle>() {
        records.push(row?.into());
    }

    tracing::debug!(rows = records.len(), "loaded article csv");
    Ok(ArticleDataset::new(records))
}

/// Read records from a CSV file.
pub fn load_csv_path(path: impl AsRef<Path>) -> Result<ArticleDataset> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dataset = load_csv_reader(file)?;
    tracing::info!(path = %path.display(), rows = dataset.len(), "loaded articles");
    Ok(dataset)
}

/// Build a dataset from parallel columns.
///
/// Text dates should already be normalised with [`parse_clean_date`].
pub fn from_columns(
    disease: Vec<String>,
    abs_scores: Vec<f64>,
    clean_date: Vec<CleanDate>,
) -> Result<ArticleDataset> {
    if disease.len() != abs_scores.len() || disease.len() != clean_date.len() {
        return Err(Error::data(format!(
            "column lengths differ: disease={}, abs_scores={}, Clean_Date={}",
            disease.len(),
            abs_scores.len(),
            clean_date.len()
        )));
    }

    Ok(disease
        .into_iter()
        .zip(abs_scores)
        .zip(clean_date)
        .map(|((disease, abs_scores), clean_date)| ArticleRecord {
            disease,
            abs_scores,
            clean_date,
        })
        .collect())
}
