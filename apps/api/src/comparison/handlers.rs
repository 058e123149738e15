use std::collections::BTreeSet;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::comparison::pipeline::compare;
use crate::errors::AppError;
use crate::state::AppState;
use crate::storage;

/// JSON body returned by `POST /api/v1/comparisons`.
#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub adherence_percentage: f64,
    pub missing_terms: BTreeSet<String>,
    /// Name the upload was stored under, relative to the storage root.
    pub resume_file: String,
}

/// POST /api/v1/comparisons
///
/// Multipart form: `resume` (PDF file part) and `job_description` (text
/// part). Validates both before the pipeline runs: the file must carry an
/// allow-listed extension and the job text must not be blank.
pub async fn handle_create_comparison(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ComparisonResponse>, AppError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        // Take owned copies up front; consuming the field ends its borrow.
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(bad_multipart)?;
                resume = Some((filename, data));
            }
            "job_description" => {
                job_description = Some(field.text().await.map_err(bad_multipart)?);
            }
            _ => {} // unknown fields are ignored
        }
    }

    let (filename, data) =
        resume.ok_or_else(|| AppError::Validation("missing 'resume' file field".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("missing 'job_description' field".to_string()))?;

    if filename.is_empty() {
        return Err(AppError::Validation(
            "resume upload has no filename".to_string(),
        ));
    }
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job description must not be blank".to_string(),
        ));
    }
    if !state.config.is_allowed_upload(&filename) {
        return Err(AppError::Validation(format!(
            "unsupported file extension for '{filename}'"
        )));
    }

    let resume_file = storage::persist_upload(&state.config.storage_root, &filename, &data).await?;
    let report = compare(&data, &job_description)?;

    info!(
        adherence = report.adherence_percentage,
        missing = report.missing_terms.len(),
        "comparison computed for {resume_file}"
    );

    Ok(Json(ComparisonResponse {
        adherence_percentage: report.adherence_percentage,
        missing_terms: report.missing_terms,
        resume_file,
    }))
}

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("malformed multipart request: {e}"))
}
