//! Crawler module for review page fetching and extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching of one review page at a time
//! - Review block extraction
//! - Last-page computation from the reported review total
//! - The sequential page loop

mod coordinator;
mod extractor;
mod fetcher;
mod page;
mod pagination;

pub use coordinator::Crawler;
pub use extractor::ReviewExtractor;
pub use fetcher::{build_http_client, fetch_page};
pub use page::PageDocument;
pub use pagination::{last_page_for, PaginationPlanner};

use crate::config::ScraperConfig;
use crate::output::ResultTable;
use crate::ReviewError;

/// Crawls every review page of a movie and returns the collected rows
///
/// This is the shortest path from a configuration to a table. Use
/// [`Crawler::run`] directly to also get the page counters and stop reason.
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(ResultTable)` - Rows gathered before the crawl stopped
/// * `Err(ReviewError)` - Invalid configuration or client setup failure
pub async fn extract_reviews(config: ScraperConfig) -> Result<ResultTable, ReviewError> {
    let crawler = Crawler::new(config)?;
    Ok(crawler.run().await?.into_table())
}
