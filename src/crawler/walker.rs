//! Recursive crawl walker
//!
//! The core of the crawler: a depth-bounded, strictly sequential,
//! depth-first traversal over a site's internal links. Every failure below
//! the walker degrades to data - a `Failed` link status or a sentinel
//! description - and nothing propagates upward as an error, so one dead
//! branch never aborts its siblings or the crawl.

use crate::crawler::extractor::extract;
use crate::crawler::fetcher::Fetcher;
use crate::model::{CrawlNode, LinkRecord, LinkStatus};
use crate::summary::{Summarize, MAX_SUMMARY_WORDS, MIN_SUMMARY_WORDS};
use crate::url::{source_host, visit_key};
use futures::future::BoxFuture;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Description used when a page has no paragraph text
pub const NO_CONTENT_SUMMARY: &str = "No content to summarize";

/// Description used when the summarizer fails
pub const SUMMARY_FAILURE: &str = "Error summarizing content";

/// Link description used when recursion produced no child node
pub const LINK_FAILURE: &str = "Failed to access link";

/// Depth-bounded recursive walker over one site's internal links
pub struct Walker<'a> {
    fetcher: &'a Fetcher,
    summarizer: &'a dyn Summarize,
    max_depth: u32,
}

impl<'a> Walker<'a> {
    pub fn new(fetcher: &'a Fetcher, summarizer: &'a dyn Summarize, max_depth: u32) -> Self {
        Self {
            fetcher,
            summarizer,
            max_depth,
        }
    }

    /// Walks one URL and, recursively, the internal links beneath it
    ///
    /// Returns `None` when the depth bound is already exceeded on entry,
    /// when the URL was visited earlier in this root traversal, or when the
    /// fetch fails - all three are terminal for this node only and surface
    /// as a `Failed` link status at the caller, never as an error.
    ///
    /// The `visited` set is scoped to a single root traversal; the depth
    /// check on entry caps the recursion at `max_depth + 1` frames even on
    /// cyclic link graphs.
    pub fn walk<'w>(
        &'w self,
        url: String,
        depth: u32,
        visited: &'w mut HashSet<String>,
    ) -> BoxFuture<'w, Option<CrawlNode>> {
        Box::pin(async move {
            if depth > self.max_depth {
                tracing::debug!("depth {} exceeds bound, skipping {}", depth, url);
                return None;
            }

            if !visited.insert(visit_key(&url)) {
                tracing::debug!("already visited {}, skipping", url);
                return None;
            }

            let body = self.fetcher.fetch(&url).await?;

            let source_domain = source_host(&url).unwrap_or_else(|| url.clone());
            let page = extract(&body, &source_domain);

            let description = self.describe(&page.paragraph_text);

            // Duplicate hrefs collapse onto one entry, keeping first position
            let mut links: IndexMap<String, LinkRecord> = IndexMap::new();
            for raw in page.raw_links {
                links.insert(
                    raw.url.clone(),
                    LinkRecord::pending(raw.url, raw.anchor_text),
                );
            }

            for record in links.values_mut() {
                match self.walk(record.url.clone(), depth + 1, &mut *visited).await {
                    Some(child) => {
                        record.description = child.description;
                        record.status = LinkStatus::Success;
                    }
                    None => {
                        record.description = LINK_FAILURE.to_string();
                        record.status = LinkStatus::Failed;
                    }
                }
            }

            Some(CrawlNode {
                domain: source_domain,
                title: page.title,
                description,
                links,
                depth,
            })
        })
    }

    /// Reduces paragraph text to a description, substituting sentinels for
    /// empty input and summarizer failures
    fn describe(&self, paragraph_text: &str) -> String {
        if paragraph_text.trim().is_empty() {
            return NO_CONTENT_SUMMARY.to_string();
        }

        match self
            .summarizer
            .summarize(paragraph_text, MAX_SUMMARY_WORDS, MIN_SUMMARY_WORDS)
        {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("summarizer failed: {}", e);
                SUMMARY_FAILURE.to_string()
            }
        }
    }
}
