//! Axum route handler for posting-page scraping.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::scrape::extract_posting_text;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub text: String,
}

/// POST /api/v1/scrape
///
/// Fetches a job-posting page and extracts its content region. A page where no
/// selector matches is an explicit failure, never a silent whole-page dump.
pub async fn handle_scrape(
    State(state): State<AppState>,
    Json(req): Json<ScrapeRequest>,
) -> Result<Json<ScrapeResponse>, AppError> {
    let url = reqwest::Url::parse(req.url.trim())
        .map_err(|e| AppError::Validation(format!("Invalid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Validation(
            "URL must use http or https".to_string(),
        ));
    }

    let response = state
        .http
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("Failed to fetch page: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Upstream(format!(
            "Page fetch returned status {status}"
        )));
    }

    let html = response
        .text()
        .await
        .map_err(|e| AppError::Upstream(format!("Failed to read page body: {e}")))?;

    let text = extract_posting_text(&html).ok_or_else(|| {
        AppError::ContentNotFound(
            "Could not find a job description on this page".to_string(),
        )
    })?;

    Ok(Json(ScrapeResponse { text }))
}
