//! HTTP fetcher with bounded retries and rotating client identity
//!
//! A fetch either yields a page body or nothing: transport errors, timeouts
//! and non-2xx statuses are all equivalent failed attempts, and after the
//! retry budget is spent the caller cannot tell them apart. Each attempt
//! presents a user agent drawn at random from the configured identity pool.

use crate::config::{CrawlerConfig, IdentityConfig};
use rand::seq::SliceRandom;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::time::Duration;

/// Fallback identity if the pool somehow ends up empty
const DEFAULT_AGENT: &str = "domain-prospector/0.1";

/// HTTP fetcher for the crawl
pub struct Fetcher {
    client: Client,
    user_agents: Vec<String>,
    max_retries: u32,
    retry_delay: Duration,
}

impl Fetcher {
    /// Builds the fetcher and its HTTP client from the configuration
    ///
    /// Candidate domains are probed over plain HTTP, so the client is not
    /// restricted to HTTPS. Redirects follow reqwest's default policy.
    pub fn new(
        crawler: &CrawlerConfig,
        identity: &IdentityConfig,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(crawler.timeout_secs))
            .connect_timeout(Duration::from_secs(crawler.timeout_secs))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            user_agents: identity.user_agents.clone(),
            max_retries: crawler.max_retries,
            retry_delay: Duration::from_secs(crawler.sleep_secs),
        })
    }

    /// Fetches a URL, retrying up to the configured attempt budget
    ///
    /// Attempts are separated by the fixed retry delay - no exponential
    /// growth, no jitter. Returns the response body on the first attempt
    /// that lands a 2xx, `None` once the budget is exhausted. The failure
    /// carries no reason: callers cannot distinguish "unreachable" from a
    /// 4xx/5xx answer.
    pub async fn fetch(&self, url: &str) -> Option<String> {
        for attempt in 1..=self.max_retries {
            let agent = self.pick_agent();

            match self.client.get(url).header(USER_AGENT, agent).send().await {
                Ok(response) if response.status().is_success() => {
                    match response.text().await {
                        Ok(body) => {
                            tracing::info!("fetched {} on attempt {}", url, attempt);
                            return Some(body);
                        }
                        Err(e) => tracing::warn!(
                            "attempt {}/{} for {}: failed reading body: {}",
                            attempt,
                            self.max_retries,
                            url,
                            e
                        ),
                    }
                }
                Ok(response) => tracing::warn!(
                    "attempt {}/{} for {}: HTTP {}",
                    attempt,
                    self.max_retries,
                    url,
                    response.status()
                ),
                Err(e) if e.is_timeout() => tracing::warn!(
                    "attempt {}/{} for {}: timed out",
                    attempt,
                    self.max_retries,
                    url
                ),
                Err(e) => tracing::warn!(
                    "attempt {}/{} for {}: {}",
                    attempt,
                    self.max_retries,
                    url,
                    e
                ),
            }

            if attempt < self.max_retries {
                tokio::time::sleep(self.retry_delay).await;
            }
        }

        tracing::warn!("giving up on {} after {} attempts", url, self.max_retries);
        None
    }

    fn pick_agent(&self) -> &str {
        self.user_agents
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(DEFAULT_AGENT)
    }
}
