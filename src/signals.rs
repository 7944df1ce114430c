//! Signal extraction from a fetched HTML document.
//!
//! Turns raw HTML into the [`ExtractedSignals`] the scorer consumes: authorship
//! and bio markers, the first "last updated" text, outbound links, JSON-LD
//! schema types and the leading page text used for entity extraction.
//!
//! ## Example
//!
//! ```rust
//! use eeat_audit::{extract_signals, AuditOptions};
//!
//! let html = r#"<html><body>
//!     <div class="post-author">Jane Doe</div>
//!     <time>Updated March 2024</time>
//!     <a href="https://other.org/">Source</a>
//! </body></html>"#;
//!
//! let signals = extract_signals(html, "https://example.com/post", &AuditOptions::default());
//! assert!(signals.has_author);
//! assert_eq!(signals.outbound_links.len(), 1);
//! ```

use crate::constants::{
    AUTHOR_CLASS_MARKER, BIO_CLASS_MARKER, NON_CONTENT_TAGS, NOT_FOUND_TEXT,
    UPDATE_CANDIDATE_SELECTOR, UPDATE_TEXT_MARKER,
};
use crate::options::{AuditOptions, ExternalLinkPolicy};
use crate::utils;
use once_cell::sync::Lazy;
use scraper::node::Node;
use scraper::{Html, Selector};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;
use url::Url;

static CLASS_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("[class]").unwrap());
static UPDATE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(UPDATE_CANDIDATE_SELECTOR).unwrap());
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static JSON_LD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script[type='application/ld+json']").unwrap());

/// The "last updated" signal of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LastUpdated {
    /// Whitespace-collapsed text of the first element mentioning an update.
    Found(String),
    /// No candidate element mentioned an update.
    NotFound,
}

impl LastUpdated {
    pub fn is_found(&self) -> bool {
        matches!(self, LastUpdated::Found(_))
    }

    /// Text shown in reports; `"Not found"` when absent.
    pub fn as_str(&self) -> &str {
        match self {
            LastUpdated::Found(text) => text,
            LastUpdated::NotFound => NOT_FOUND_TEXT,
        }
    }
}

impl fmt::Display for LastUpdated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signals extracted from one page. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedSignals {
    /// Some element carries a class containing "author".
    pub has_author: bool,

    /// Some element carries a class containing "bio".
    pub has_bio: bool,

    pub last_updated: LastUpdated,

    /// Outbound link targets in document order, duplicates kept.
    pub outbound_links: Vec<String>,

    /// `@type` values of the page's top-level JSON-LD objects.
    pub schema_types: BTreeSet<String>,

    /// Leading page text, truncated to the entity text limit.
    pub raw_text: String,
}

/// Extract every signal from `html`, fetched from `request_url`.
pub fn extract_signals(html: &str, request_url: &str, options: &AuditOptions) -> ExtractedSignals {
    let document = Html::parse_document(html);

    let has_author = has_class_containing(&document, AUTHOR_CLASS_MARKER);
    let has_bio = has_class_containing(&document, BIO_CLASS_MARKER);
    let last_updated = find_last_updated(&document);
    let outbound_links = outbound_links(&document, request_url, options.link_policy);
    let schema_types = schema_types(&document);

    let text = page_text(&document);
    let raw_text = utils::truncate_chars(&text, options.entity_text_limit).to_string();

    debug!(
        has_author,
        has_bio,
        last_updated = %last_updated,
        outbound_links = outbound_links.len(),
        schema_types = schema_types.len(),
        text_chars = raw_text.chars().count(),
        "signals extracted"
    );

    ExtractedSignals {
        has_author,
        has_bio,
        last_updated,
        outbound_links,
        schema_types,
        raw_text,
    }
}

/// True if any element's class attribute contains `marker`, ignoring case.
fn has_class_containing(document: &Html, marker: &str) -> bool {
    document.select(&CLASS_SELECTOR).any(|element| {
        element
            .value()
            .attr("class")
            .map(|class| utils::contains_ignore_case(class, marker))
            .unwrap_or(false)
    })
}

fn find_last_updated(document: &Html) -> LastUpdated {
    for element in document.select(&UPDATE_SELECTOR) {
        let text = element.text().collect::<String>();
        if utils::contains_ignore_case(&text, UPDATE_TEXT_MARKER) {
            return LastUpdated::Found(utils::collapse_whitespace(&text));
        }
    }
    LastUpdated::NotFound
}

fn outbound_links(document: &Html, request_url: &str, policy: ExternalLinkPolicy) -> Vec<String> {
    let hrefs = document
        .select(&LINK_SELECTOR)
        .filter_map(|a| a.value().attr("href"));

    match policy {
        ExternalLinkPolicy::RequestUrlSubstring => hrefs
            .filter(|href| is_outbound_by_substring(href, request_url))
            .map(str::to_string)
            .collect(),
        ExternalLinkPolicy::DifferentHost => match Url::parse(request_url) {
            Ok(base) => hrefs
                .filter(|href| is_outbound_by_host(href, &base))
                .map(str::to_string)
                .collect(),
            Err(_) => {
                debug!(url = request_url, "unparseable request URL, using substring rule");
                hrefs
                    .filter(|href| is_outbound_by_substring(href, request_url))
                    .map(str::to_string)
                    .collect()
            }
        },
    }
}

fn is_outbound_by_substring(href: &str, request_url: &str) -> bool {
    href.contains("http") && !href.contains(request_url)
}

fn is_outbound_by_host(href: &str, base: &Url) -> bool {
    let Ok(resolved) = base.join(href) else {
        return false;
    };
    if !matches!(resolved.scheme(), "http" | "https") {
        return false;
    }
    match (resolved.host_str(), base.host_str()) {
        (Some(link_host), Some(base_host)) => {
            utils::normalize_host(link_host) != utils::normalize_host(base_host)
        }
        (Some(_), None) => true,
        _ => false,
    }
}

/// Collect `@type` values from every parseable top-level JSON-LD object.
fn schema_types(document: &Html) -> BTreeSet<String> {
    let mut types = BTreeSet::new();

    for script in document.select(&JSON_LD_SELECTOR) {
        let content = script.text().collect::<String>();

        // Strip CDATA markers if present
        let content = content
            .trim()
            .trim_start_matches("<![CDATA[")
            .trim_end_matches("]]>")
            .trim();

        let parsed = match serde_json::from_str::<Value>(content) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "skipping malformed JSON-LD block");
                continue;
            }
        };

        let Some(object) = parsed.as_object() else {
            continue;
        };

        match object.get("@type") {
            Some(Value::String(name)) if !name.is_empty() => {
                types.insert(name.clone());
            }
            Some(Value::Array(names)) => {
                types.extend(
                    names
                        .iter()
                        .filter_map(Value::as_str)
                        .filter(|name| !name.is_empty())
                        .map(str::to_string),
                );
            }
            _ => {}
        }
    }

    types
}

/// Visible page text: trimmed text nodes outside script-like elements, joined by spaces.
fn page_text(document: &Html) -> String {
    let mut parts = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let in_non_content = node
            .parent()
            .and_then(|parent| {
                parent
                    .value()
                    .as_element()
                    .map(|element| NON_CONTENT_TAGS.contains(&element.name()))
            })
            .unwrap_or(false);
        if in_non_content {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join(" ")
}
