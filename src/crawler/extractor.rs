//! Review block extraction
//!
//! # Extraction Rules
//!
//! | Field | Source |
//! |-------|--------|
//! | user_id | `data-review-user` attribute of `div.user-review` (required) |
//! | rating | text of `span.rating-star`, whitespace-trimmed |
//! | title | text of `h2.review-title`, trimmed rating text removed, then trimmed |
//! | review_text | text of `p.short`, else `p.hidden` (spoiler variant) |
//!
//! A block without `data-review-user` is skipped and the rest of the page is
//! still extracted.

use crate::crawler::page::{compile_selector, first_text, PageDocument};
use crate::output::ReviewRecord;
use crate::ReviewError;
use scraper::{ElementRef, Selector};

const USER_ID_ATTR: &str = "data-review-user";

/// Pulls review records out of a parsed page
pub struct ReviewExtractor {
    block: Selector,
    rating: Selector,
    title: Selector,
    plain_text: Selector,
    hidden_text: Selector,
}

impl ReviewExtractor {
    pub fn new() -> Result<Self, ReviewError> {
        Ok(Self {
            block: compile_selector("div.user-review")?,
            rating: compile_selector("span.rating-star")?,
            title: compile_selector("h2.review-title")?,
            plain_text: compile_selector("p.short")?,
            hidden_text: compile_selector("p.hidden")?,
        })
    }

    /// Extracts every well-formed review block on the page, in page order
    ///
    /// A page without review blocks yields an empty vector.
    pub fn extract(&self, doc: &PageDocument) -> Vec<ReviewRecord> {
        doc.select(&self.block)
            .filter_map(|block| self.extract_block(block))
            .collect()
    }

    fn extract_block(&self, block: ElementRef<'_>) -> Option<ReviewRecord> {
        let Some(user_id) = block.value().attr(USER_ID_ATTR) else {
            tracing::warn!("Skipping review block without {} attribute", USER_ID_ATTR);
            return None;
        };

        let rating = first_text(block, &self.rating).map(|text| text.trim().to_string());

        let title = first_text(block, &self.title)
            .map(|raw| strip_rating(&raw, rating.as_deref()));

        // Plain text wins when a block carries both variants
        let review_text = first_text(block, &self.plain_text)
            .or_else(|| first_text(block, &self.hidden_text))
            .map(|text| text.trim().to_string());

        tracing::debug!("Extracted review by {}", user_id);

        Some(ReviewRecord {
            user_id: user_id.to_string(),
            rating,
            title,
            review_text,
        })
    }
}

/// Removes every occurrence of the rating text from a title, then trims
fn strip_rating(raw_title: &str, rating: Option<&str>) -> String {
    match rating {
        Some(rating) if !rating.is_empty() => raw_title.replace(rating, "").trim().to_string(),
        _ => raw_title.trim().to_string(),
    }
}
