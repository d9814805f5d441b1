//! Crawl statistics
//!
//! Aggregates a structured report into counts for the `--stats` CLI mode.

use crate::model::LinkStatus;
use crate::output::json_output::CrawlSnapshot;

/// Aggregated statistics over a crawl snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlStatistics {
    pub total_domains: usize,
    pub total_links: usize,
    pub links_success: usize,
    pub links_failed: usize,
    pub links_pending: usize,
}

/// Computes statistics from a loaded snapshot
pub fn compute_statistics(snapshot: &CrawlSnapshot) -> CrawlStatistics {
    let mut stats = CrawlStatistics {
        total_domains: snapshot.domains.len(),
        ..CrawlStatistics::default()
    };

    for node in snapshot.domains.nodes() {
        for record in node.links.values() {
            stats.total_links += 1;
            match record.status {
                LinkStatus::Success => stats.links_success += 1,
                LinkStatus::Failed => stats.links_failed += 1,
                LinkStatus::Pending => stats.links_pending += 1,
            }
        }
    }

    stats
}

/// Prints statistics in a human-readable format
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");
    println!("Domains found:  {}", stats.total_domains);
    println!("Links recorded: {}", stats.total_links);
    println!("  Resolved:     {}", stats.links_success);
    println!("  Failed:       {}", stats.links_failed);
    if stats.links_pending > 0 {
        println!("  Pending:      {}", stats.links_pending);
    }

    if stats.total_links > 0 {
        let rate = stats.links_success as f64 / stats.total_links as f64 * 100.0;
        println!("\nLink success rate: {:.2}%", rate);
    }
}
