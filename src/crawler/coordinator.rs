//! Crawler coordinator - the page loop
//!
//! Pages are visited strictly in order starting at 1, one request at a time:
//! 1. Fetch page N
//! 2. Extract its review blocks into the table
//! 3. Compute the last page from the reported total
//! 4. Stop if the total is unknown or N reached the last page, otherwise
//!    pause and continue with N + 1
//!
//! A failed request ends the crawl; the rows collected so far are returned.

use crate::config::{validate, ScraperConfig};
use crate::crawler::extractor::ReviewExtractor;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::page::PageDocument;
use crate::crawler::pagination::PaginationPlanner;
use crate::output::{CrawlReport, ResultTable, ReviewRecord, StopReason};
use crate::ReviewError;
use chrono::Utc;
use reqwest::Client;

/// Review crawler for one movie
pub struct Crawler {
    config: ScraperConfig,
    client: Client,
    extractor: ReviewExtractor,
    planner: PaginationPlanner,
}

impl Crawler {
    /// Creates a crawler from a configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Configuration valid and HTTP client built
    /// * `Err(ReviewError)` - Invalid configuration or client setup failure
    pub fn new(config: ScraperConfig) -> Result<Self, ReviewError> {
        validate(&config)?;
        let client = build_http_client(&config)?;
        Self::assemble(config, client)
    }

    /// Creates a crawler with the default settings for `movie_id`
    pub fn for_movie(movie_id: impl Into<String>) -> Result<Self, ReviewError> {
        Self::new(ScraperConfig::for_movie(movie_id))
    }

    /// Creates a crawler that sends requests through an existing client
    ///
    /// The client's own User-Agent and headers are used as-is.
    pub fn with_client(config: ScraperConfig, client: Client) -> Result<Self, ReviewError> {
        validate(&config)?;
        Self::assemble(config, client)
    }

    fn assemble(config: ScraperConfig, client: Client) -> Result<Self, ReviewError> {
        Ok(Self {
            extractor: ReviewExtractor::new()?,
            planner: PaginationPlanner::new(config.page_size)?,
            config,
            client,
        })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Runs the page loop to completion
    ///
    /// Request failures do not surface as `Err`; they end the loop and are
    /// recorded in the report's `stop` field.
    pub async fn run(&self) -> Result<CrawlReport, ReviewError> {
        let started_at = Utc::now();
        tracing::info!(
            "Starting review crawl for movie {} ({})",
            self.config.movie_id,
            self.config.base_url()
        );

        let mut table = ResultTable::new();
        let mut page_num: u32 = 1;
        let mut pages_fetched: u32 = 0;
        let mut pauses: u32 = 0;
        let mut last_page = None;

        let stop = loop {
            let url = self.config.page_url(page_num)?;

            pages_fetched += 1;
            let body = match self.fetch(url.as_str()).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::error!("{}", e);
                    break StopReason::FetchFailed {
                        url: url.to_string(),
                        message: e.to_string(),
                    };
                }
            };

            let (records, page_last) = self.digest_page(&body);
            tracing::info!(
                "Page {}: {} reviews (last page: {:?})",
                page_num,
                records.len(),
                page_last
            );
            table.extend(records);
            last_page = page_last;

            match page_last {
                None => {
                    tracing::warn!(
                        "No review total found on page {}, stopping",
                        page_num
                    );
                    break StopReason::UnknownTotal { page: page_num };
                }
                Some(last) if page_num >= last => break StopReason::Completed,
                Some(_) => {}
            }

            tokio::time::sleep(self.config.wait()).await;
            pauses += 1;
            page_num += 1;
        };

        let report = CrawlReport {
            table,
            pages_fetched,
            pauses,
            last_page,
            stop,
            started_at,
            finished_at: Utc::now(),
        };

        tracing::info!("Crawl finished: {}", report);

        Ok(report)
    }

    async fn fetch(&self, url: &str) -> Result<String, ReviewError> {
        fetch_page(&self.client, url)
            .await
            .map_err(|source| ReviewError::Fetch {
                url: url.to_string(),
                source,
            })
    }

    /// Parses one page body and returns its rows and the last page bound
    fn digest_page(&self, body: &str) -> (Vec<ReviewRecord>, Option<u32>) {
        let doc = PageDocument::parse(body);
        (self.extractor.extract(&doc), self.planner.last_page(&doc))
    }
}
