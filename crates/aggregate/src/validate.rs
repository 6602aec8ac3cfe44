//! Input validation.
//!
//! All three checks run before any grouping or rendering.

use trend_core::{ArticleDataset, Error, Result};

/// Reject an empty term, an empty dataset, or a term not present in the
/// dataset's `disease` column (compared case-insensitively).
pub fn validate_request(dataset: &ArticleDataset, term: &str) -> Result<()> {
    if term.is_empty() {
        tracing::warn!("rejected request without a term");
        return Err(Error::invalid_argument(
            "must supply a term using the `term` argument",
        ));
    }

    if dataset.is_empty() {
        tracing::warn!(term, "rejected request with an empty dataset");
        return Err(Error::invalid_argument(
            "must supply a dataset with at least one row",
        ));
    }

    let diseases = dataset.distinct_diseases();
    let wanted = term.to_lowercase();
    if !diseases.iter().any(|d| d.to_lowercase() == wanted) {
        tracing::warn!(term, options = diseases.len(), "rejected unknown term");
        return Err(Error::invalid_argument(format!(
            "please include a valid disease, got {term:?}. Options include: {diseases:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trend_core::ArticleRecord;

    fn dataset() -> ArticleDataset {
        vec![
            ArticleRecord::new("flu", 0.2, "2020-01-01"),
            ArticleRecord::new("Measles", -0.2, "2020-01-01"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_empty_term_checked_first() {
        // Empty term wins even when the dataset is empty too
        let err = validate_request(&ArticleDataset::default(), "").unwrap_err();
        assert!(err.to_string().contains("must supply a term"));

        let err = validate_request(&dataset(), "").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_empty_dataset() {
        let err = validate_request(&ArticleDataset::default(), "flu").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("must supply a dataset"));
    }

    #[test]
    fn test_unknown_term_lists_options() {
        let err = validate_request(&dataset(), "ebola").unwrap_err();
        let msg = err.to_string();
        assert!(err.is_invalid_argument());
        assert!(msg.contains("\"flu\""));
        assert!(msg.contains("\"Measles\""));
    }

    #[test]
    fn test_case_insensitive_term() {
        assert!(validate_request(&dataset(), "FLU").is_ok());
        assert!(validate_request(&dataset(), "measles").is_ok());
    }
}
