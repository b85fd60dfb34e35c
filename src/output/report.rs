//! Crawl report types
//!
//! A crawl always ends with a report, even when a page request failed; the
//! rows gathered before the failure stay in the table.

use crate::output::table::ResultTable;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Why the page loop stopped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum StopReason {
    /// The last page reported by the site was reached
    Completed,

    /// The page carried no usable total review count
    UnknownTotal { page: u32 },

    /// A page request failed; nothing after it was fetched
    FetchFailed { url: String, message: String },
}

impl StopReason {
    /// Returns true if every page was fetched
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns true if the crawl was cut short by a request failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::UnknownTotal { page } => write!(f, "no review total on page {}", page),
            Self::FetchFailed { url, message } => write!(f, "fetch of {} failed: {}", url, message),
        }
    }
}

/// Outcome of one crawl
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    /// Extracted reviews
    pub table: ResultTable,

    /// GET requests issued, including a failed one
    pub pages_fetched: u32,

    /// Inter-page pauses taken
    pub pauses: u32,

    /// Last page bound computed from the most recent page
    pub last_page: Option<u32>,

    pub stop: StopReason,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// Wall-clock duration of the crawl in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    pub fn into_table(self) -> ResultTable {
        self.table
    }
}

impl fmt::Display for CrawlReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} reviews from {} page(s), {} pause(s), stopped: {}",
            self.table.len(),
            self.pages_fetched,
            self.pauses,
            self.stop
        )
    }
}
