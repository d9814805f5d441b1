//! URL helpers
//!
//! Small utilities for deriving a page's source domain from its URL and for
//! normalizing URLs into visited-set keys.

use url::Url;

/// Extracts the host of a URL, keeping an explicit port
///
/// The host is lowercased; a port is kept because the internal-link
/// heuristic and URL resolution both treat `host:port` as the domain.
///
/// # Examples
///
/// ```
/// use domain_prospector::url::source_host;
///
/// assert_eq!(source_host("http://aa.com/page"), Some("aa.com".to_string()));
/// assert_eq!(source_host("http://127.0.0.1:8080/"), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn source_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    Some(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host,
    })
}

/// Normalizes a URL into its visited-set key
///
/// Only the trailing slash is stripped, so `http://aa.com` and
/// `http://aa.com/` count as one recursion target.
pub fn visit_key(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
