//! Resume matcher — compares extracted resume text against a job posting via
//! the LLM and returns an ATS-style match report.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ats::prompts::{MATCH_PROMPT_TEMPLATE, MATCH_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Structured comparison of a resume against a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    /// 0–100. Clamped and rounded at the deserialization edge so no caller
    /// ever sees an out-of-range value.
    #[serde(deserialize_with = "clamped_score")]
    pub match_score: u8,
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub summary: String,
    pub suggestions: String,
}

fn clamped_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() {
        return Err(serde::de::Error::custom("matchScore must be a finite number"));
    }
    Ok(raw.clamp(0.0, 100.0).round() as u8)
}

/// The resume-matching collaborator. Held in `AppState` as
/// `Arc<dyn ResumeMatcher>` so tests substitute a double.
#[async_trait]
pub trait ResumeMatcher: Send + Sync {
    async fn match_resume(&self, resume_text: &str, job_text: &str)
        -> Result<AtsReport, AppError>;
}

/// Production matcher backed by the Claude API.
pub struct LlmMatcher {
    llm: LlmClient,
}

impl LlmMatcher {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeMatcher for LlmMatcher {
    async fn match_resume(
        &self,
        resume_text: &str,
        job_text: &str,
    ) -> Result<AtsReport, AppError> {
        let prompt = MATCH_PROMPT_TEMPLATE
            .replace("{resume_text}", resume_text)
            .replace("{job_text}", job_text);
        self.llm
            .call_json(&prompt, MATCH_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Resume matching failed: {e}")))
    }
}
