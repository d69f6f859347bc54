//! Posting quality scorer — deterministic, pure rubric over a [`JobExtraction`].
//!
//! Four weighted categories sum to a 100-point ceiling. The scorer is total:
//! every missing or unusable field contributes zero instead of failing, so a
//! partial extraction still renders a complete score card.

use serde::{Deserialize, Serialize};

use crate::analysis::extraction::{JobExtraction, WorkLocationType};

const MAX_SALARY_POINTS: f64 = 35.0;
const MAX_LOCATION_POINTS: f64 = 20.0;
const MAX_COST_OF_LIVING_POINTS: f64 = 30.0;
const MAX_POSTING_AGE_POINTS: f64 = 15.0;

const TOTAL_MAX_POINTS: f64 =
    MAX_SALARY_POINTS + MAX_LOCATION_POINTS + MAX_COST_OF_LIVING_POINTS + MAX_POSTING_AGE_POINTS;

/// Per-category display scores, each 0–100.
///
/// `redFlags` is a legacy field name kept for client compatibility; it carries
/// the posting-age freshness category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub overall: u8,
    pub salary: u8,
    pub location: u8,
    pub cost_of_living: u8,
    pub red_flags: u8,
}

/// An extraction plus its computed scores. Produced once per analysis request
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnalysis {
    #[serde(flatten)]
    pub extraction: JobExtraction,
    pub scores: Scores,
}

/// Scores an extraction against the fixed rubric. Pure: no I/O, no randomness,
/// identical output for identical input.
pub fn score(extraction: JobExtraction) -> ScoredAnalysis {
    let salary_points = salary_points(extraction.salary_min, extraction.salary_max);
    let location_points = location_points(extraction.work_location_type);

    // The cost-of-living display score IS the raw extracted value (or 0), not
    // a points/ceiling ratio like the other categories. Quirk inherited from
    // the rubric; both the display and the contribution share this one value.
    let cost_of_living_value = extraction
        .cost_of_living_analysis
        .cost_of_living_score
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, 100.0);
    let cost_of_living_points = cost_of_living_value / 100.0 * MAX_COST_OF_LIVING_POINTS;

    let age_category = posting_age_category(extraction.posting_age_in_days);
    let age_points = age_category / 100.0 * MAX_POSTING_AGE_POINTS;

    let total_points = salary_points + location_points + cost_of_living_points + age_points;

    let scores = Scores {
        overall: display(total_points, TOTAL_MAX_POINTS),
        salary: display(salary_points, MAX_SALARY_POINTS),
        location: display(location_points, MAX_LOCATION_POINTS),
        cost_of_living: cost_of_living_value.round() as u8,
        red_flags: age_category.round() as u8,
    };

    ScoredAnalysis { extraction, scores }
}

fn display(points: f64, ceiling: f64) -> u8 {
    (points / ceiling * 100.0).round() as u8
}

/// Salary transparency: 25 points for publishing a range at all, up to 10 more
/// for a narrow spread. Zero or absent bounds score nothing; a zero maximum
/// would divide by zero, so it is treated as absent.
fn salary_points(salary_min: Option<f64>, salary_max: Option<f64>) -> f64 {
    let (Some(min), Some(max)) = (salary_min, salary_max) else {
        return 0.0;
    };
    if min == 0.0 || max <= 0.0 {
        return 0.0;
    }

    let mut points = 25.0;
    let spread = (max - min) / max;
    if spread < 0.15 {
        points += 10.0;
    } else if spread < 0.30 {
        points += 5.0;
    }
    points
}

fn location_points(location: WorkLocationType) -> f64 {
    match location {
        WorkLocationType::Remote => 20.0,
        WorkLocationType::Hybrid => 15.0,
        WorkLocationType::Onsite => 5.0,
        WorkLocationType::Unspecified => 0.0,
    }
}

/// Posting-age freshness ladder, 0–100. Unknown (or nonsensical negative) age
/// scores zero.
fn posting_age_category(age_in_days: Option<i64>) -> f64 {
    match age_in_days {
        Some(days) if days < 0 => 0.0,
        Some(days) if days < 7 => 100.0,
        Some(days) if days < 14 => 80.0,
        Some(days) if days < 30 => 50.0,
        Some(days) if days < 60 => 20.0,
        Some(_) => 0.0,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extraction::CostOfLivingAnalysis;

    fn extraction(
        salary: Option<(f64, f64)>,
        location: WorkLocationType,
        cost_of_living_score: Option<f64>,
        posting_age_in_days: Option<i64>,
    ) -> JobExtraction {
        JobExtraction {
            salary_min: salary.map(|(min, _)| min),
            salary_max: salary.map(|(_, max)| max),
            work_location_type: location,
            job_city: None,
            job_state: None,
            job_country: None,
            posting_age_in_days,
            cost_of_living_analysis: CostOfLivingAnalysis {
                reasoning: "test".to_string(),
                cost_of_living_score,
            },
            overall_summary: "test".to_string(),
        }
    }

    fn bare() -> JobExtraction {
        extraction(None, WorkLocationType::Unspecified, None, None)
    }

    #[test]
    fn zero_spread_salary_scores_full() {
        let scored = score(extraction(
            Some((100_000.0, 100_000.0)),
            WorkLocationType::Unspecified,
            None,
            None,
        ));
        assert_eq!(scored.scores.salary, 100);
    }

    #[test]
    fn wide_spread_salary_scores_base_only() {
        // 50% spread: 25 of 35 points -> 71 on display
        let scored = score(extraction(
            Some((100_000.0, 200_000.0)),
            WorkLocationType::Unspecified,
            None,
            None,
        ));
        assert_eq!(scored.scores.salary, 71);
    }

    #[test]
    fn moderate_spread_salary_gets_partial_bonus() {
        // 20% spread: 25 + 5 = 30 of 35 -> 86
        let scored = score(extraction(
            Some((80_000.0, 100_000.0)),
            WorkLocationType::Unspecified,
            None,
            None,
        ));
        assert_eq!(scored.scores.salary, 86);
    }

    #[test]
    fn missing_salary_scores_zero() {
        let scored = score(bare());
        assert_eq!(scored.scores.salary, 0);
    }

    #[test]
    fn zero_salary_max_treated_as_absent() {
        let scored = score(extraction(
            Some((0.0, 0.0)),
            WorkLocationType::Unspecified,
            None,
            None,
        ));
        assert_eq!(scored.scores.salary, 0);
    }

    #[test]
    fn location_display_scores() {
        for (location, expected) in [
            (WorkLocationType::Remote, 100),
            (WorkLocationType::Hybrid, 75),
            (WorkLocationType::Onsite, 25),
            (WorkLocationType::Unspecified, 0),
        ] {
            let scored = score(extraction(None, location, None, None));
            assert_eq!(scored.scores.location, expected, "{location:?}");
        }
    }

    #[test]
    fn posting_age_ladder() {
        for (age, expected) in [(3, 100), (10, 80), (20, 50), (45, 20), (90, 0)] {
            let scored = score(extraction(
                None,
                WorkLocationType::Unspecified,
                None,
                Some(age),
            ));
            assert_eq!(scored.scores.red_flags, expected, "age {age}");
        }
    }

    #[test]
    fn unknown_posting_age_scores_zero() {
        let scored = score(bare());
        assert_eq!(scored.scores.red_flags, 0);
    }

    #[test]
    fn cost_of_living_display_is_the_raw_value() {
        // Display is the extracted value itself, NOT renormalized through the
        // 30-point ceiling like the other categories.
        let scored = score(extraction(
            None,
            WorkLocationType::Unspecified,
            Some(72.0),
            None,
        ));
        assert_eq!(scored.scores.cost_of_living, 72);
        // contribution 21.6 of 100 -> overall rounds to 22
        assert_eq!(scored.scores.overall, 22);
    }

    #[test]
    fn absent_cost_of_living_scores_zero() {
        let scored = score(bare());
        assert_eq!(scored.scores.cost_of_living, 0);
    }

    #[test]
    fn strong_posting_end_to_end() {
        // salary 25+10, location 20, cost of living 24, age 15 -> 94
        let scored = score(extraction(
            Some((100_000.0, 110_000.0)),
            WorkLocationType::Remote,
            Some(80.0),
            Some(5),
        ));
        assert_eq!(scored.scores.overall, 94);
        assert_eq!(scored.scores.salary, 100);
        assert_eq!(scored.scores.location, 100);
        assert_eq!(scored.scores.cost_of_living, 80);
        assert_eq!(scored.scores.red_flags, 100);
    }

    #[test]
    fn all_scores_within_bounds() {
        let records = [
            bare(),
            extraction(
                Some((1.0, 1_000_000.0)),
                WorkLocationType::Remote,
                Some(100.0),
                Some(0),
            ),
            extraction(
                Some((200_000.0, 200_000.0)),
                WorkLocationType::Hybrid,
                Some(0.0),
                Some(400),
            ),
        ];
        for record in records {
            let scores = score(record).scores;
            for value in [
                scores.overall,
                scores.salary,
                scores.location,
                scores.cost_of_living,
                scores.red_flags,
            ] {
                assert!(value <= 100);
            }
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let record = extraction(
            Some((90_000.0, 100_000.0)),
            WorkLocationType::Hybrid,
            Some(55.0),
            Some(12),
        );
        let first = score(record.clone());
        let second = score(record);
        assert_eq!(first, second);
    }

    #[test]
    fn fresher_posting_never_scores_lower() {
        let ages = [400, 90, 60, 45, 30, 20, 14, 10, 7, 3, 0];
        let mut previous = 0u8;
        for age in ages {
            let scored = score(extraction(
                None,
                WorkLocationType::Unspecified,
                None,
                Some(age),
            ));
            assert!(
                scored.scores.red_flags >= previous,
                "age {age} scored below an older posting"
            );
            previous = scored.scores.red_flags;
        }
    }

    #[test]
    fn empty_extraction_still_produces_full_score_card() {
        let scored = score(bare());
        assert_eq!(scored.scores.overall, 0);
        assert_eq!(scored.scores.salary, 0);
        assert_eq!(scored.scores.location, 0);
        assert_eq!(scored.scores.cost_of_living, 0);
        assert_eq!(scored.scores.red_flags, 0);
    }

    #[test]
    fn scores_serialize_with_legacy_field_name() {
        let scored = score(bare());
        let json = serde_json::to_value(&scored).unwrap();
        assert!(json["scores"].get("redFlags").is_some());
        assert!(json["scores"].get("costOfLiving").is_some());
    }
}
