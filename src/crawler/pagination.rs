//! Last-page computation from the reported review total
//!
//! Review pages carry a `p.result-number` element whose text looks like
//! `"45件中 1～20件目を表示"`. The number before `件中` is the total review
//! count for the movie. It may be written in ASCII or full-width digits.

use crate::crawler::page::{compile_selector, element_text, PageDocument};
use crate::{ConfigError, ReviewError};
use regex::Regex;
use scraper::Selector;

/// Computes how many pages the review listing spans
pub struct PaginationPlanner {
    result_number: Selector,
    count_pattern: Regex,
    page_size: u32,
}

impl PaginationPlanner {
    /// # Arguments
    ///
    /// * `page_size` - Reviews per page, at least 1
    pub fn new(page_size: u32) -> Result<Self, ReviewError> {
        if page_size == 0 {
            return Err(ReviewError::Config(ConfigError::Validation(
                "page_size must be >= 1, got 0".to_string(),
            )));
        }

        Ok(Self {
            result_number: compile_selector("p.result-number")?,
            count_pattern: Regex::new(r"([0-9０-９]+)件中")?,
            page_size,
        })
    }

    /// Total review count reported on the page
    ///
    /// `None` when the element or the number is missing, or the number does
    /// not fit in a `u32`.
    pub fn review_count(&self, doc: &PageDocument) -> Option<u32> {
        let element = doc.select(&self.result_number).next()?;
        let text = element_text(element);
        let captures = self.count_pattern.captures(&text)?;
        parse_count(captures.get(1)?.as_str())
    }

    /// Index of the last page to fetch, or `None` if the total is unknown
    pub fn last_page(&self, doc: &PageDocument) -> Option<u32> {
        self.review_count(doc)
            .map(|count| last_page_for(count, self.page_size))
    }
}

/// Decimal value of a run of ASCII or full-width digits, `None` on overflow
fn parse_count(digits: &str) -> Option<u32> {
    digits.chars().try_fold(0u32, |acc, c| {
        let digit = match c {
            '０'..='９' => c as u32 - '０' as u32,
            _ => c.to_digit(10)?,
        };
        acc.checked_mul(10)?.checked_add(digit)
    })
}

/// `(count - 1) / page_size + 1`, so an exact multiple of the page size does
/// not open an extra page. A count of zero still yields page 1.
///
/// # Example
///
/// ```
/// use eiga_reviews::crawler::last_page_for;
///
/// assert_eq!(last_page_for(20, 20), 1);
/// assert_eq!(last_page_for(21, 20), 2);
/// ```
pub fn last_page_for(review_count: u32, page_size: u32) -> u32 {
    review_count.saturating_sub(1) / page_size.max(1) + 1
}
