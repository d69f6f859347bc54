//! Job-posting page scraping — pulls the content region out of a fetched
//! posting page through an ordered list of board-specific CSS selectors.

pub mod handlers;

use scraper::{Html, Selector};

/// Minimum extracted length (in characters) for a region to count as the
/// posting body. Shorter matches are navigation chrome or teaser snippets.
pub const MIN_CONTENT_CHARS: usize = 200;

/// Content-region selectors, tried top to bottom. Board-specific selectors
/// first, generic landmarks last.
pub const CONTENT_SELECTORS: [&str; 9] = [
    // LinkedIn
    ".jobs-description__content .jobs-description-content__text",
    "#job-details",
    // Indeed
    "#jobDescriptionText",
    // Greenhouse
    "#content",
    // Lever
    ".content .section-wrapper .postings-body",
    // Wellfound
    r#"[data-test="job-description"]"#,
    // Glassdoor
    ".jobDescriptionContent",
    // Generic landmarks
    "article",
    "main",
];

/// Extracts the posting text from a fetched page.
///
/// Returns the first selector's region whose text exceeds
/// [`MIN_CONTENT_CHARS`]. Returns `None` when nothing qualifies: there is
/// deliberately no whole-document fallback, since body text on a job board is
/// dominated by navigation and listings noise.
pub fn extract_posting_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for raw in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(raw) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = collapse_whitespace(element.text());
            if text.chars().count() > MIN_CONTENT_CHARS {
                return Some(text);
            }
        }
    }

    None
}

/// Joins text nodes and collapses whitespace runs into single spaces.
fn collapse_whitespace<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let joined = parts.collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_text() -> String {
        "We are hiring a Senior Backend Engineer to design, build, and operate \
         our core services. You will work with a distributed team on a modern \
         stack, own features end to end, and mentor other engineers. We offer \
         a competitive salary and a strong engineering culture."
            .to_string()
    }

    #[test]
    fn board_specific_selector_wins() {
        let html = format!(
            r#"<html><body>
                <div id="jobDescriptionText">{}</div>
                <article>{} trailing article copy</article>
            </body></html>"#,
            long_text(),
            long_text()
        );
        let text = extract_posting_text(&html).unwrap();
        assert!(text.starts_with("We are hiring"));
        assert!(!text.contains("trailing article copy"));
    }

    #[test]
    fn short_region_is_skipped_for_a_later_selector() {
        let html = format!(
            r#"<html><body>
                <div id="content">Too short.</div>
                <article>{}</article>
            </body></html>"#,
            long_text()
        );
        let text = extract_posting_text(&html).unwrap();
        assert!(text.contains("Senior Backend Engineer"));
    }

    #[test]
    fn nested_linkedin_region_matches() {
        let html = format!(
            r#"<html><body>
                <div class="jobs-description__content">
                    <div class="jobs-description-content__text">{}</div>
                </div>
            </body></html>"#,
            long_text()
        );
        assert!(extract_posting_text(&html).is_some());
    }

    #[test]
    fn generic_main_is_the_last_resort() {
        let html = format!("<html><body><main>{}</main></body></html>", long_text());
        assert!(extract_posting_text(&html).is_some());
    }

    #[test]
    fn no_matching_region_fails_without_body_fallback() {
        // Plenty of body text, but none of it inside a known content region.
        let html = format!(
            "<html><body><div class=\"feed\">{}</div></body></html>",
            long_text()
        );
        assert_eq!(extract_posting_text(&html), None);
    }

    #[test]
    fn threshold_is_exclusive() {
        let exactly_200 = "x".repeat(MIN_CONTENT_CHARS);
        let html = format!("<html><body><main>{exactly_200}</main></body></html>");
        assert_eq!(extract_posting_text(&html), None);
    }

    #[test]
    fn whitespace_runs_are_collapsed() {
        let padded = long_text().replace(' ', "\n   ");
        let html = format!("<html><body><article>{padded}</article></body></html>");
        let text = extract_posting_text(&html).unwrap();
        assert!(!text.contains('\n'));
        assert!(!text.contains("  "));
    }
}
