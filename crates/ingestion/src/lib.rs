//! Dataset ingestion for the sentiment-trends system.
//!
//! This crate handles:
//! - Reading article records from CSV or column vectors
//! - Date normalisation
//! - Year bucketing of rows

pub mod bucket;
pub mod loader;

pub use bucket::{bucket_rows, year_bucket, BucketedScore};
pub use loader::{from_columns, load_csv_path, load_csv_reader, parse_clean_date};
