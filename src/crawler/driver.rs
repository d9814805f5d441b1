//! Crawl driver - the top-level enumeration loop
//!
//! Iterates candidate name lengths, walks every candidate domain of each
//! length at depth 0, accumulates the successful root nodes, and flushes the
//! report files after every find so an interrupted run loses at most the
//! node in flight.

use crate::config::Config;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::walker::Walker;
use crate::generator::DomainGenerator;
use crate::model::CrawlResultSet;
use crate::output::write_reports;
use crate::summary::{LeadSummarizer, Summarize};
use crate::Result;
use std::collections::HashSet;
use std::time::Duration;

/// Top-level crawl orchestrator
pub struct Driver {
    config: Config,
    fetcher: Fetcher,
    summarizer: Box<dyn Summarize>,
    results: CrawlResultSet,
}

impl Driver {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Fetcher::new(&config.crawler, &config.identity)?;

        Ok(Self {
            config,
            fetcher,
            summarizer: Box::new(LeadSummarizer),
            results: CrawlResultSet::new(),
        })
    }

    /// Replaces the summarizer collaborator
    pub fn with_summarizer(mut self, summarizer: Box<dyn Summarize>) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// Runs the full enumeration loop
    ///
    /// Starts at the configured name length and keeps increasing it until
    /// the target domain count is reached or the optional length cap is
    /// passed. Without a cap the loop is unbounded in principle - the
    /// candidate space grows exponentially with length, so in practice the
    /// domain target ends the run first.
    pub async fn run(&mut self) -> Result<()> {
        let mut length = self.config.generator.start_length;

        loop {
            if let Some(cap) = self.config.generator.max_length {
                if length > cap {
                    tracing::info!("reached name length cap {}", cap);
                    break;
                }
            }

            tracing::info!("scanning candidate domains of length {}", length);
            let candidates = DomainGenerator::new(length, &self.config.generator.extensions);

            if self.run_candidates(candidates).await? {
                break;
            }

            length += 1;
        }

        tracing::info!("crawl finished with {} domains collected", self.results.len());
        Ok(())
    }

    /// Walks an explicit sequence of candidate domains at depth 0
    ///
    /// Each success is appended to the result set and both reports are
    /// rewritten before moving on; a report write error aborts the run.
    /// Candidates are paced by the configured sleep, one in flight at a
    /// time. Returns `true` once the target domain count is reached.
    pub async fn run_candidates<I>(&mut self, candidates: I) -> Result<bool>
    where
        I: IntoIterator<Item = String>,
    {
        let pace = Duration::from_secs(self.config.crawler.sleep_secs);

        for candidate in candidates {
            let walker = Walker::new(
                &self.fetcher,
                self.summarizer.as_ref(),
                self.config.crawler.max_depth,
            );
            let mut visited = HashSet::new();

            match walker
                .walk(format!("http://{}", candidate), 0, &mut visited)
                .await
            {
                Some(node) => {
                    tracing::info!("domain found: {}", candidate);
                    self.results.push(node);
                    write_reports(&self.results, &self.config.output)?;

                    if self.results.len() >= self.config.crawler.max_domains {
                        tracing::info!(
                            "target of {} domains reached",
                            self.config.crawler.max_domains
                        );
                        return Ok(true);
                    }
                }
                None => tracing::info!("failed to reach: {}", candidate),
            }

            tokio::time::sleep(pace).await;
        }

        Ok(false)
    }

    /// Root-level nodes collected so far
    pub fn results(&self) -> &CrawlResultSet {
        &self.results
    }
}

/// Runs the main crawl operation
pub async fn run_crawl(config: Config) -> Result<()> {
    let mut driver = Driver::new(config)?;
    driver.run().await
}
