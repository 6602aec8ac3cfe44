//! PyO3 bindings for the sentiment-trends Rust components.
//!
//! Exposes to Python:
//! - Article datasets (from columns or CSV)
//! - Yearly aggregation
//! - `plot_sentiment_trends`, returning the yearly table and SVG charts
//! - Logging setup

use chrono::NaiveDate;
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

use trend_aggregate::TrendAggregator;
use trend_core::{
    config::{AggregationConfig, DEFAULT_STYLE},
    ArticleDataset as RustArticleDataset,
    CleanDate,
    Error as RustError,
    YearlyRow as RustYearlyRow,
};
use trend_ingestion::{from_columns, load_csv_path, parse_clean_date};
use trend_plot::{RenderContext, Style, TrendPlotter};

/// Map a library error onto the closest Python exception.
fn to_py_err(err: RustError) -> PyErr {
    match err {
        RustError::InvalidArgument(_)
        | RustError::DateParse { .. }
        | RustError::Config(_)
        | RustError::Data(_) => PyValueError::new_err(err.to_string()),
        RustError::Io(_) => PyIOError::new_err(err.to_string()),
        _ => PyRuntimeError::new_err(err.to_string()),
    }
}

/// A `Clean_Date` cell: `datetime.date` / `datetime.datetime` or text.
#[derive(FromPyObject)]
enum DateCell {
    Date(NaiveDate),
    Text(String),
}

impl From<DateCell> for CleanDate {
    fn from(cell: DateCell) -> Self {
        match cell {
            DateCell::Date(date) => CleanDate::Date(date),
            DateCell::Text(text) => parse_clean_date(&text),
        }
    }
}

// ============================================================================
// Python-exposed Types
// ============================================================================

/// One year of the merged sentiment table.
#[pyclass]
#[derive(Clone)]
pub struct YearlyRow {
    #[pyo3(get)]
    pub group_date: String,
    #[pyo3(get)]
    pub min_pos: f64,
    #[pyo3(get)]
    pub max_pos: f64,
    #[pyo3(get)]
    pub mean_pos: f64,
    #[pyo3(get)]
    pub count_pos: Option<u64>,
    #[pyo3(get)]
    pub min_neg: f64,
    #[pyo3(get)]
    pub max_neg: f64,
    #[pyo3(get)]
    pub mean_neg: f64,
    #[pyo3(get)]
    pub count_neg: Option<u64>,
    #[pyo3(get)]
    pub min: f64,
    #[pyo3(get)]
    pub max: f64,
    #[pyo3(get)]
    pub mean: f64,
    #[pyo3(get)]
    pub count: u64,
    #[pyo3(get)]
    pub perc_pos: f64,
}

#[pymethods]
impl YearlyRow {
    fn __repr__(&self) -> String {
        format!(
            "YearlyRow(group_date={}, count={}, mean={:.4}, perc_pos={:.4})",
            self.group_date, self.count, self.mean, self.perc_pos
        )
    }
}

impl From<&RustYearlyRow> for YearlyRow {
    fn from(r: &RustYearlyRow) -> Self {
        YearlyRow {
            group_date: r.group_date.to_string(),
            min_pos: r.min_pos,
            max_pos: r.max_pos,
            mean_pos: r.mean_pos,
            count_pos: r.count_pos,
            min_neg: r.min_neg,
            max_neg: r.max_neg,
            mean_neg: r.mean_neg,
            count_neg: r.count_neg,
            min: r.min,
            max: r.max,
            mean: r.mean,
            count: r.count,
            perc_pos: r.perc_pos,
        }
    }
}

/// Sentiment-scored articles.
#[pyclass]
pub struct ArticleDataset {
    inner: RustArticleDataset,
}

#[pymethods]
impl ArticleDataset {
    /// Build from parallel `disease`, `abs_scores` and `Clean_Date` columns,
    /// e.g. `df[col].tolist()` from a pandas frame. Dates may be strings or
    /// `datetime.date` / `datetime.datetime` values.
    #[new]
    fn new(disease: Vec<String>, abs_scores: Vec<f64>, clean_date: Vec<DateCell>) -> PyResult<Self> {
        let dates = clean_date.into_iter().map(CleanDate::from).collect();
        let inner = from_columns(disease, abs_scores, dates).map_err(to_py_err)?;
        Ok(ArticleDataset { inner })
    }

    /// Load from a CSV file with `disease`, `abs_scores` and `Clean_Date` columns.
    #[staticmethod]
    fn load_csv(path: &str) -> PyResult<Self> {
        let inner = load_csv_path(path).map_err(to_py_err)?;
        Ok(ArticleDataset { inner })
    }

    /// Distinct disease labels, in order of first appearance.
    fn distinct_diseases(&self) -> Vec<String> {
        self.inner
            .distinct_diseases()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!("ArticleDataset(rows={})", self.inner.len())
    }
}

// ============================================================================
// Python-exposed Functions
// ============================================================================

/// Aggregate a term's articles by year.
#[pyfunction]
#[pyo3(signature = (dataset, term, min_count = 10))]
fn aggregate_yearly(dataset: PyRef<'_, ArticleDataset>, term: &str, min_count: u64) -> PyResult<Vec<YearlyRow>> {
    let aggregator = TrendAggregator::new(AggregationConfig {
        min_count,
        ..AggregationConfig::default()
    });
    let table = aggregator.aggregate(&dataset.inner, term).map_err(to_py_err)?;
    Ok(table.rows().iter().map(YearlyRow::from).collect())
}

/// Aggregate by year, draw the percent-positive and mean-sentiment charts.
///
/// Returns `(rows, [percent_positive_svg, mean_sentiment_svg])`.
#[pyfunction]
#[pyo3(signature = (dataset, term, style = DEFAULT_STYLE))]
fn plot_sentiment_trends(
    dataset: PyRef<'_, ArticleDataset>,
    term: &str,
    style: &str,
) -> PyResult<(Vec<YearlyRow>, Vec<String>)> {
    let mut ctx = RenderContext::new(style).map_err(to_py_err)?;
    let table = TrendPlotter::default()
        .run(&dataset.inner, term, &mut ctx)
        .map_err(to_py_err)?;

    let rows = table.rows().iter().map(YearlyRow::from).collect();
    Ok((rows, ctx.render_svgs()))
}

/// Names of the built-in chart styles.
#[pyfunction]
fn available_styles() -> Vec<&'static str> {
    Style::available()
}

/// Install a stderr log subscriber. Returns `False` if one was already set.
#[pyfunction]
#[pyo3(signature = (level = "info"))]
fn init_logging(level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

// ============================================================================
// Module Definition
// ============================================================================

/// Sentiment Trends - yearly sentiment aggregation and charts for Python.
#[pymodule]
fn sentiment_trends(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Types
    m.add_class::<YearlyRow>()?;
    m.add_class::<ArticleDataset>()?;

    // Functions
    m.add_function(wrap_pyfunction!(aggregate_yearly, m)?)?;
    m.add_function(wrap_pyfunction!(plot_sentiment_trends, m)?)?;
    m.add_function(wrap_pyfunction!(available_styles, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;

    tracing::debug!("sentiment_trends module initialised");
    Ok(())
}
