//! Job-posting extraction — the structured record the LLM produces from raw
//! posting text, plus the normalization pass that makes it safe to score.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{EXTRACT_PROMPT_TEMPLATE, EXTRACT_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Work arrangement stated by the posting. Unknown values from the collaborator
/// fold into `Unspecified` rather than failing the whole extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkLocationType {
    Remote,
    Hybrid,
    Onsite,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Salary-vs-cost-of-living assessment for the posting's location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostOfLivingAnalysis {
    pub reasoning: String,
    /// 0–100 where higher means the salary goes further. Absent when the
    /// posting gives too little to assess.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_of_living_score: Option<f64>,
}

/// Structured summary of a job posting, produced by the extraction collaborator.
///
/// Wire format is camelCase to match the collaborator contract. Optional fields
/// arrive as JSON `null` or are omitted; both deserialize to `None`.
/// `workLocationType`, `costOfLivingAnalysis.reasoning`, and `overallSummary`
/// are required — their absence fails deserialization, which the extractor
/// surfaces as a descriptive error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobExtraction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<f64>,
    pub work_location_type: WorkLocationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_age_in_days: Option<i64>,
    pub cost_of_living_analysis: CostOfLivingAnalysis,
    pub overall_summary: String,
}

impl JobExtraction {
    /// Normalizes every optional field in one pass, so downstream code never
    /// special-cases collaborator quirks:
    ///
    /// - non-finite, negative, or zero salary values become absent
    /// - a half-present salary pair becomes fully absent
    /// - an inverted salary pair is swapped so `salary_max >= salary_min`
    /// - a negative posting age becomes absent
    /// - the cost-of-living score is clamped to [0, 100]
    /// - blank display strings become absent
    pub fn normalize(mut self) -> Self {
        self.salary_min = self.salary_min.filter(is_positive_amount);
        self.salary_max = self.salary_max.filter(is_positive_amount);
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) if min > max => {
                self.salary_min = Some(max);
                self.salary_max = Some(min);
            }
            (Some(_), None) | (None, Some(_)) => {
                self.salary_min = None;
                self.salary_max = None;
            }
            _ => {}
        }

        self.posting_age_in_days = self.posting_age_in_days.filter(|days| *days >= 0);

        self.cost_of_living_analysis.cost_of_living_score = self
            .cost_of_living_analysis
            .cost_of_living_score
            .filter(|score| score.is_finite())
            .map(|score| score.clamp(0.0, 100.0));

        self.job_city = non_blank(self.job_city);
        self.job_state = non_blank(self.job_state);
        self.job_country = non_blank(self.job_country);

        self
    }
}

fn is_positive_amount(value: &f64) -> bool {
    value.is_finite() && *value > 0.0
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// The job-posting extraction collaborator. Held in `AppState` as
/// `Arc<dyn JobExtractor>` so tests substitute a double.
#[async_trait]
pub trait JobExtractor: Send + Sync {
    async fn extract(&self, job_text: &str) -> Result<JobExtraction, AppError>;
}

/// Production extractor backed by the Claude API.
pub struct LlmExtractor {
    llm: LlmClient,
}

impl LlmExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl JobExtractor for LlmExtractor {
    async fn extract(&self, job_text: &str) -> Result<JobExtraction, AppError> {
        let prompt = EXTRACT_PROMPT_TEMPLATE.replace("{job_text}", job_text);
        let extraction: JobExtraction = self
            .llm
            .call_json(&prompt, EXTRACT_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Job posting extraction failed: {e}")))?;
        Ok(extraction.normalize())
    }
}
