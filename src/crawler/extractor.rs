//! Page extraction
//!
//! Turns a fetched HTML body into the pieces the walker needs: the page
//! title, the internal links in document order, and the concatenated
//! paragraph text that feeds the summarizer. Extraction is pure - the same
//! body and domain always produce the same [`PageInfo`].

use scraper::{Html, Selector};

/// Sentinel used when a page or anchor has no usable title text
pub const NO_TITLE: &str = "No Title";

/// One anchor classified as internal, with its resolved absolute URL
#[derive(Debug, Clone, PartialEq)]
pub struct RawLink {
    pub url: String,
    pub anchor_text: String,
}

/// Everything extracted from a single page
#[derive(Debug, Clone, PartialEq)]
pub struct PageInfo {
    pub title: String,
    pub raw_links: Vec<RawLink>,
    pub paragraph_text: String,
}

/// Extracts title, internal links and paragraph text from an HTML body
pub fn extract(body: &str, source_domain: &str) -> PageInfo {
    let document = Html::parse_document(body);

    PageInfo {
        title: extract_title(&document),
        raw_links: extract_internal_links(&document, source_domain),
        paragraph_text: extract_paragraph_text(&document),
    }
}

/// First `<title>` text, trimmed; absent or blank yields the sentinel
fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return NO_TITLE.to_string();
    };

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string())
}

/// Walks `a[href]` elements in document order, keeping internal ones
fn extract_internal_links(document: &Html, source_domain: &str) -> Vec<RawLink> {
    let mut links = Vec::new();

    let Ok(selector) = Selector::parse("a[href]") else {
        return links;
    };

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if !is_internal(href, source_domain) {
            continue;
        }

        let text = element.text().collect::<String>().trim().to_string();
        let anchor_text = if text.is_empty() {
            NO_TITLE.to_string()
        } else {
            text
        };

        links.push(RawLink {
            url: resolve(href, source_domain),
            anchor_text,
        });
    }

    links
}

/// Same-site test for an anchor href
///
/// A substring heuristic, not a same-origin check: root-relative hrefs and
/// any href mentioning the source domain count as internal, so an external
/// URL carrying the domain in its query string slips through.
pub fn is_internal(href: &str, source_domain: &str) -> bool {
    href.starts_with('/') || href.contains(source_domain)
}

/// Resolves an internal href to an absolute URL
///
/// Hrefs that already start with `http` pass through untouched; everything
/// else is grafted onto `http://{source_domain}`. A relative path that
/// begins with the literal text "http" is therefore misclassified as
/// already absolute.
pub fn resolve(href: &str, source_domain: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("http://{}{}", source_domain, href)
    }
}

/// Space-joined text content of every `<p>` in document order
fn extract_paragraph_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };

    document
        .select(&selector)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
