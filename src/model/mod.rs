//! Crawl result data model
//!
//! The shapes produced by a crawl: one [`CrawlNode`] per reached page, its
//! outgoing internal links as [`LinkRecord`]s keyed by absolute URL, and the
//! append-only [`CrawlResultSet`] of root-level nodes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Resolution status of a single internal link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    /// Link has been recorded but not yet resolved
    Pending,

    /// Recursing into the link produced a child node
    Success,

    /// Fetch or recursion was exhausted without a child node
    Failed,
}

impl LinkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }

    /// Returns true once the walker has settled the link either way
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One internal link discovered on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Absolute URL of the link target
    pub url: String,

    /// Anchor text, or the "No Title" sentinel when blank
    pub anchor_text: String,

    /// Description copied from the resolved child page, or a failure sentinel
    pub description: String,

    pub status: LinkStatus,
}

impl LinkRecord {
    /// A freshly discovered, not yet resolved link
    pub fn pending(url: String, anchor_text: String) -> Self {
        Self {
            url,
            anchor_text,
            description: String::new(),
            status: LinkStatus::Pending,
        }
    }
}

/// A successfully crawled page and its resolved internal links
///
/// `links` is keyed by absolute URL and preserves extraction order; a later
/// duplicate of the same URL overwrites the value but keeps the position,
/// so each target appears once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlNode {
    /// Host of the page, e.g. `aa.com` (port preserved when present)
    pub domain: String,

    pub title: String,

    pub description: String,

    pub links: IndexMap<String, LinkRecord>,

    /// Recursion level: 0 for root domains, +1 per followed link
    pub depth: u32,
}

/// Insertion-ordered, append-only collection of root-level crawl nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrawlResultSet {
    nodes: Vec<CrawlNode>,
}

impl CrawlResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: CrawlNode) {
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[CrawlNode] {
        &self.nodes
    }
}
