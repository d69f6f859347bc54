//! Axum route handlers for the resume ATS check.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;

use crate::ats::matcher::AtsReport;
use crate::ats::pdf::extract_resume_text;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/ats/check
///
/// Multipart request with a `jobText` text part and a `resume` PDF file part.
/// Preconditions are checked in order: job text first (the check depends on
/// having posting text), then the file, then its type, then extractability.
pub async fn handle_ats_check(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AtsReport>, AppError> {
    let mut job_text: Option<String> = None;
    let mut resume: Option<(Option<String>, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("jobText") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read jobText part: {e}"))
                })?;
                job_text = Some(text);
            }
            Some("resume") => {
                let content_type = field.content_type().map(str::to_owned);
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read resume part: {e}"))
                })?;
                resume = Some((content_type, data));
            }
            _ => {} // ignore unknown parts
        }
    }

    let job_text = job_text.unwrap_or_default();
    let job_text = job_text.trim();
    if job_text.is_empty() {
        return Err(AppError::Validation(
            "Please provide a job description first".to_string(),
        ));
    }

    let (content_type, data) = resume.ok_or_else(|| {
        AppError::Validation("Please upload a resume PDF".to_string())
    })?;

    let resume_text = extract_resume_text(content_type.as_deref(), &data)?;

    let report = state.matcher.match_resume(&resume_text, job_text).await?;
    Ok(Json(report))
}
