//! The merged yearly table returned by the aggregator.

use serde::{Deserialize, Deserializer, Serialize};
use std::io::Write;

use crate::error::Result;
use crate::types::YearBucket;

/// Column names in output order.
pub const YEARLY_COLUMNS: [&str; 14] = [
    "group_date",
    "min_pos",
    "max_pos",
    "mean_pos",
    "count_pos",
    "min_neg",
    "max_neg",
    "mean_neg",
    "count_neg",
    "min",
    "max",
    "mean",
    "count",
    "perc_pos",
];

/// Read a JSON `null` back as `NaN`; serde_json writes `NaN` as `null`.
fn nan_from_null<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// One year of the merged table.
///
/// Sign-subset statistics are `NaN` (counts `None`) when the year has no
/// article of that sign. Only `perc_pos` is ever defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    pub group_date: YearBucket,
    #[serde(deserialize_with = "nan_from_null")]
    pub min_pos: f64,
    #[serde(deserialize_with = "nan_from_null")]
    pub max_pos: f64,
    #[serde(deserialize_with = "nan_from_null")]
    pub mean_pos: f64,
    pub count_pos: Option<u64>,
    #[serde(deserialize_with = "nan_from_null")]
    pub min_neg: f64,
    #[serde(deserialize_with = "nan_from_null")]
    pub max_neg: f64,
    #[serde(deserialize_with = "nan_from_null")]
    pub mean_neg: f64,
    pub count_neg: Option<u64>,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub count: u64,
    /// Share of positive articles in the year (0-1).
    pub perc_pos: f64,
}

impl YearlyRow {
    /// Cells in [`YEARLY_COLUMNS`] order; missing values are empty strings.
    fn to_record(&self) -> Vec<String> {
        fn float(v: f64) -> String {
            if v.is_nan() {
                String::new()
            } else {
                v.to_string()
            }
        }
        fn count(v: Option<u64>) -> String {
            v.map(|c| c.to_string()).unwrap_or_default()
        }

        vec![
            self.group_date.to_string(),
            float(self.min_pos),
            float(self.max_pos),
            float(self.mean_pos),
            count(self.count_pos),
            float(self.min_neg),
            float(self.max_neg),
            float(self.mean_neg),
            count(self.count_neg),
            float(self.min),
            float(self.max),
            float(self.mean),
            self.count.to_string(),
            float(self.perc_pos),
        ]
    }
}

/// Yearly sentiment table for one term, sorted ascending by year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearlyTable {
    /// Term the table was built for, as supplied by the caller.
    pub term: String,
    rows: Vec<YearlyRow>,
}

impl YearlyTable {
    /// Create a table; rows are sorted by year and must not repeat a year.
    pub fn new(term: impl Into<String>, mut rows: Vec<YearlyRow>) -> Self {
        rows.sort_by_key(|r| r.group_date);
        rows.dedup_by_key(|r| r.group_date);
        Self {
            term: term.into(),
            rows,
        }
    }

    /// Rows with a dense 0-based index.
    pub fn rows(&self) -> &[YearlyRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no year survived the filters.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at a dense index.
    pub fn get(&self, index: usize) -> Option<&YearlyRow> {
        self.rows.get(index)
    }

    /// Row for a given year.
    pub fn row_for(&self, year: YearBucket) -> Option<&YearlyRow> {
        self.rows
            .binary_search_by_key(&year, |r| r.group_date)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Year labels in table order.
    pub fn years(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.group_date.to_string()).collect()
    }

    /// `perc_pos` column.
    pub fn perc_pos(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.perc_pos).collect()
    }

    /// All-subset `mean` column.
    pub fn means(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.mean).collect()
    }

    /// Serialize to JSON. `NaN` cells become `null`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a table written by [`YearlyTable::to_json`]; `null` cells
    /// become `NaN`.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        Ok(Self::new(table.term, table.rows))
    }

    /// Write the table as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(YEARLY_COLUMNS)?;
        for row in &self.rows {
            wtr.write_record(row.to_record())?;
        }
        wtr.flush()?;
        Ok(())
    }
}
