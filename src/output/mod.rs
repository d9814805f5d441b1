//! Report output
//!
//! Persists the accumulated crawl results as two files: a flattened CSV
//! table and a nested JSON snapshot. Both use whole-file overwrite
//! semantics, so flushing after every find never corrupts earlier output -
//! a crash between flushes loses at most the node in flight.

mod csv_output;
mod json_output;
pub mod stats;

pub use csv_output::{flatten, write_csv_report, FlatRow};
pub use json_output::{load_snapshot, write_json_snapshot, CrawlSnapshot};
pub use stats::{compute_statistics, print_statistics, CrawlStatistics};

use crate::config::OutputConfig;
use crate::model::CrawlResultSet;
use crate::Result;
use std::path::Path;

/// Rewrites both report files from the current result set
pub fn write_reports(results: &CrawlResultSet, config: &OutputConfig) -> Result<()> {
    write_csv_report(results, Path::new(&config.csv_path))?;
    write_json_snapshot(results, Path::new(&config.json_path))?;
    Ok(())
}
