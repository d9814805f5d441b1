//! Nested structured report
//!
//! Serializes the full result set, nesting intact, so the crawl can be
//! reloaded or inspected offline. The file is rewritten whole on every
//! flush.

use crate::model::CrawlResultSet;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// The structured report: crawl metadata plus the nested result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlSnapshot {
    pub generated_at: DateTime<Utc>,
    pub total_domains: usize,
    pub domains: CrawlResultSet,
}

/// Writes the structured report, replacing the file's previous contents
pub fn write_json_snapshot(results: &CrawlResultSet, path: &Path) -> Result<()> {
    let snapshot = CrawlSnapshot {
        generated_at: Utc::now(),
        total_domains: results.len(),
        domains: results.clone(),
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    Ok(())
}

/// Reads a structured report back from disk
pub fn load_snapshot(path: &Path) -> Result<CrawlSnapshot> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
