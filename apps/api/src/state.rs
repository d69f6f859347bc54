use std::sync::Arc;

use crate::analysis::extraction::JobExtractor;
use crate::ats::matcher::ResumeMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The collaborator clients are trait objects constructed once at startup, so
/// tests substitute doubles without any global client state.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn JobExtractor>,
    pub matcher: Arc<dyn ResumeMatcher>,
    /// HTTP client used for fetching job-posting pages to scrape.
    pub http: reqwest::Client,
}
