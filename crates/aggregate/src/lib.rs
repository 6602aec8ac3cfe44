//! Yearly sentiment aggregation for the sentiment-trends system.
//!
//! This crate handles:
//! - Request validation (term, dataset, known diseases)
//! - Partitioning a term's rows into positive / negative / all views
//! - Per-year summary statistics
//! - Outer-joining the three summaries into the yearly table

pub mod engine;
pub mod merge;
pub mod partition;
pub mod summary;
pub mod validate;

pub use engine::{aggregate_yearly, TrendAggregator};
pub use merge::{merge_all, merge_signed, perc_pos, SignedSummary};
pub use partition::{partition, Partitions};
pub use summary::{summarize, SummaryAccumulator};
pub use validate::validate_request;
