//! Axum route handlers for the posting analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::scorer::{score, ScoredAnalysis};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub job_text: String,
}

/// POST /api/v1/analysis
///
/// Validates the input locally, asks the extraction collaborator for a
/// structured record, and scores it. The scorer itself cannot fail.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ScoredAnalysis>, AppError> {
    let job_text = req.job_text.trim();
    if job_text.is_empty() {
        return Err(AppError::Validation(
            "Job posting text cannot be empty".to_string(),
        ));
    }

    let extraction = state.extractor.extract(job_text).await?;
    Ok(Json(score(extraction)))
}
