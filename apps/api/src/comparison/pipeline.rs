//! The comparison pipeline: extract → normalize → score + detect gaps.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::comparison::extractor::{extract_text, DocumentParseError};
use crate::comparison::gaps::missing_terms;
use crate::comparison::normalizer::normalize;
use crate::comparison::scorer::cosine_similarity;

/// Result of one résumé ⇄ job-description comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Cosine similarity as a percentage, rounded to two decimal places.
    pub adherence_percentage: f64,
    /// Job-description terms the résumé does not contain.
    pub missing_terms: BTreeSet<String>,
}

/// Compares an uploaded résumé (PDF bytes) against a job description.
///
/// Stateless: every invocation works on fresh values and retains nothing.
/// Fails only when the document itself is unreadable; degenerate text on
/// either side produces a 0.0 score, not an error. Callers are expected to
/// reject blank job text before invoking this.
pub fn compare(document: &[u8], job_text: &str) -> Result<ComparisonReport, DocumentParseError> {
    let resume_text = normalize(&extract_text(document)?);
    let job_text = normalize(job_text);

    let similarity = cosine_similarity(&resume_text, &job_text);
    Ok(ComparisonReport {
        adherence_percentage: (similarity * 10_000.0).round() / 100.0,
        missing_terms: missing_terms(&resume_text, &job_text),
    })
}
