//! Core types and configuration for the sentiment-trends system.
//!
//! This crate provides shared types used across all other crates:
//! - Article records and datasets
//! - Year buckets and per-bucket summaries
//! - The merged yearly table
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod table;
pub mod types;

pub use config::TrendConfig;
pub use error::{Error, Result};
pub use table::{YearlyRow, YearlyTable};
pub use types::*;
