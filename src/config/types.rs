use serde::Deserialize;

/// Main configuration structure for domain-prospector
///
/// Every table and field has a default matching the reference constants, so
/// the crawler runs without a config file at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub generator: GeneratorConfig,
    pub identity: IdentityConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum recursion depth when following internal links
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Fetch attempts per URL before giving up
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Per-attempt HTTP timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Fixed delay between retry attempts and between candidate domains (seconds)
    #[serde(rename = "sleep-secs")]
    pub sleep_secs: u64,

    /// Stop once this many domains have been collected
    #[serde(rename = "max-domains")]
    pub max_domains: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_retries: 3,
            timeout_secs: 5,
            sleep_secs: 1,
            max_domains: 1000,
        }
    }
}

/// Candidate domain generation configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Name length to start enumerating at
    #[serde(rename = "start-length")]
    pub start_length: u32,

    /// Optional cap on name length; absent means the length grows without bound
    #[serde(rename = "max-length")]
    pub max_length: Option<u32>,

    /// Domain extensions crossed with every generated name, in order
    pub extensions: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_length: 1,
            max_length: None,
            extensions: vec![".com".to_string(), ".org".to_string(), ".net".to_string()],
        }
    }
}

/// Client identity configuration
///
/// One entry is chosen uniformly at random for every fetch attempt.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    #[serde(rename = "user-agents")]
    pub user_agents: Vec<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            user_agents: vec![
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15".to_string(),
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36".to_string(),
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0".to_string(),
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:120.0) Gecko/20100101 Firefox/120.0".to_string(),
            ],
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the flattened tabular report
    #[serde(rename = "csv-path")]
    pub csv_path: String,

    /// Path of the nested structured report
    #[serde(rename = "json-path")]
    pub json_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "found_domains.csv".to_string(),
            json_path: "found_domains.json".to_string(),
        }
    }
}
