// LLM prompt constants for the resume ATS check.

/// System prompt for resume matching — enforces JSON-only output.
pub const MATCH_SYSTEM: &str = "You are an expert ATS (Applicant Tracking System) \
    and career coach. Compare a resume against a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Matching prompt template. Replace `{resume_text}` and `{job_text}` before
/// sending.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"Compare the following resume against the job description.

Return a JSON object with this EXACT schema (no extra fields):
{
  "matchScore": 75,
  "matchingKeywords": ["keyword present in both"],
  "missingKeywords": ["important job keyword absent from the resume"],
  "summary": "a concise summary of how well the resume fits the role",
  "suggestions": "actionable suggestions for improving the resume for this job"
}

Rules:

MATCH SCORE: 0-100 representing how well the resume matches the job's
requirements, weighing required skills over nice-to-haves.

KEYWORDS: Compare skills, technologies, and qualifications. List the most
important matches and the most important gaps; skip filler words.

SUGGESTIONS: Concrete edits the candidate could make, phrased constructively.

RESUME:
---
{resume_text}
---

JOB DESCRIPTION:
---
{job_text}
---"#;
