//! Output module for crawl results
//!
//! This module holds:
//! - The review rows and the ordered table they accumulate into
//! - The crawl report with counters and the stop reason
//!
//! Writing the table to a file format is left to the caller; every type here
//! derives `serde::Serialize`.

mod report;
mod table;

pub use report::{CrawlReport, StopReason};
pub use table::{ResultTable, ReviewRecord};
