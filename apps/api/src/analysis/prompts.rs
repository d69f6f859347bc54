// LLM prompt constants for posting extraction.
// Each module that calls the LLM keeps its prompts.rs alongside it.

/// System prompt for posting extraction — enforces JSON-only output.
pub const EXTRACT_SYSTEM: &str = "You are an expert HR analyst and recruiter. \
    Analyze a job posting and extract structured quality information. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Extraction prompt template. Replace `{job_text}` before sending.
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"Analyze the following job posting and extract the required information.

Return a JSON object with this EXACT schema (no extra fields):
{
  "salaryMin": 100000,
  "salaryMax": 120000,
  "workLocationType": "remote",
  "jobCity": "Austin",
  "jobState": "TX",
  "jobCountry": "USA",
  "postingAgeInDays": 3,
  "costOfLivingAnalysis": {
    "reasoning": "one or two sentences explaining the rating",
    "costOfLivingScore": 80
  },
  "overallSummary": "a one-paragraph quality summary from an HR perspective"
}

Rules for extraction:

SALARY: Extract the numerical minimum and maximum. If a single number is given,
use it for both. Use null for both when no salary is stated. Never guess.

LOCATION: "workLocationType" must be exactly one of "remote", "hybrid",
"onsite", or "unspecified". Extract city, state/province, and country when
stated; use null otherwise.

POSTING AGE: If the posting states when it was published ("Posted 3 days ago",
"Posted: 2 weeks ago"), convert to whole days. Use null when no date is given.

COST OF LIVING: If both a salary and a location are present, rate from 0 to 100
how far the salary goes in that location (100 = salary goes very far). Use null
for "costOfLivingScore" when salary or location is missing, and explain why in
"reasoning".

SUMMARY: One concise paragraph on the posting's overall quality.

JOB POSTING:
---
{job_text}
---"#;
