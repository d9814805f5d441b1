//! Crawler module for candidate probing and site traversal
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with bounded retries and rotating identity
//! - Page extraction (title, internal links, paragraph text)
//! - The depth-bounded recursive walker
//! - The top-level enumeration driver

mod driver;
mod extractor;
mod fetcher;
mod walker;

pub use driver::{run_crawl, Driver};
pub use extractor::{extract, is_internal, resolve, PageInfo, RawLink, NO_TITLE};
pub use fetcher::Fetcher;
pub use walker::{Walker, LINK_FAILURE, NO_CONTENT_SUMMARY, SUMMARY_FAILURE};

use crate::config::Config;
use crate::Result;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl: it builds the HTTP
/// fetcher, then enumerates candidate domains and walks each reachable one,
/// flushing the report files as it goes.
pub async fn crawl(config: Config) -> Result<()> {
    run_crawl(config).await
}
