//! Flattened tabular report
//!
//! Each crawl node becomes one CSV row per link, carrying the domain-level
//! title and description alongside the link fields. A node without links
//! still gets one row, with the link fields empty.

use crate::model::CrawlResultSet;
use crate::Result;
use serde::Serialize;
use std::path::Path;

/// One row of the tabular report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatRow {
    pub domain: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub link_title: String,
    pub link_description: String,
    pub link_status: String,
}

/// Flattens the result set into one row per (domain, link) pair
pub fn flatten(results: &CrawlResultSet) -> Vec<FlatRow> {
    let mut rows = Vec::new();

    for node in results.nodes() {
        if node.links.is_empty() {
            rows.push(FlatRow {
                domain: node.domain.clone(),
                title: node.title.clone(),
                description: node.description.clone(),
                link: String::new(),
                link_title: String::new(),
                link_description: String::new(),
                link_status: String::new(),
            });
            continue;
        }

        for record in node.links.values() {
            rows.push(FlatRow {
                domain: node.domain.clone(),
                title: node.title.clone(),
                description: node.description.clone(),
                link: record.url.clone(),
                link_title: record.anchor_text.clone(),
                link_description: record.description.clone(),
                link_status: record.status.as_str().to_string(),
            });
        }
    }

    rows
}

/// Writes the tabular report, replacing the file's previous contents
pub fn write_csv_report(results: &CrawlResultSet, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for row in flatten(results) {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}
