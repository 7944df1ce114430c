//! Configuration options for an audit run.
//!
//! This module provides [`AuditOptions`] and [`AuditOptionsBuilder`]
//! for configuring the fetch, extraction and entity steps of an audit.
//!
//! ## Example
//!
//! ```rust
//! use eeat_audit::{AuditOptions, ExternalLinkPolicy};
//! use std::time::Duration;
//!
//! // Using default options
//! let options = AuditOptions::default();
//! assert_eq!(options.entity_text_limit, 1000);
//!
//! // Using builder for custom options
//! let options = AuditOptions::builder()
//!     .fetch_timeout(Duration::from_secs(5))
//!     .link_policy(ExternalLinkPolicy::DifferentHost)
//!     .build();
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How an outbound link is judged to point away from the audited page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExternalLinkPolicy {
    /// Keep hrefs containing `"http"` that do not contain the full request URL
    /// as a substring.
    ///
    /// Over-counts same-site links whose path differs from the request path and
    /// under-counts foreign links that happen to embed the request URL (for
    /// example in a query string).
    #[default]
    RequestUrlSubstring,

    /// Resolve each href against the request URL and keep http(s) links whose
    /// host differs from the request host, ignoring a leading `www.`.
    DifferentHost,
}

/// Configuration options for the [`Auditor`](crate::Auditor).
///
/// ## Creating Options
///
/// ```rust
/// use eeat_audit::AuditOptions;
///
/// let options = AuditOptions::builder()
///     .entity_text_limit(500)
///     .entity_display_limit(5)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Upper bound on the page fetch, including reading the body.
    ///
    /// Default: 10 seconds
    pub fetch_timeout: Duration,

    /// Number of leading characters of page text handed to entity extraction.
    ///
    /// Entities beyond this offset are never seen.
    ///
    /// Default: `1000`
    pub entity_text_limit: usize,

    /// Maximum number of unique entity texts kept for display.
    ///
    /// Scoring always uses the full entity count.
    ///
    /// Default: `10`
    pub entity_display_limit: usize,

    /// Rule deciding which links count as outbound.
    ///
    /// Default: [`ExternalLinkPolicy::RequestUrlSubstring`]
    pub link_policy: ExternalLinkPolicy,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
            entity_text_limit: 1000,
            entity_display_limit: 10,
            link_policy: ExternalLinkPolicy::default(),
        }
    }
}

impl AuditOptions {
    /// Creates a new builder for AuditOptions
    pub fn builder() -> AuditOptionsBuilder {
        AuditOptionsBuilder::default()
    }
}

/// Builder for [`AuditOptions`].
#[derive(Default)]
pub struct AuditOptionsBuilder {
    fetch_timeout: Option<Duration>,
    entity_text_limit: Option<usize>,
    entity_display_limit: Option<usize>,
    link_policy: Option<ExternalLinkPolicy>,
}

impl AuditOptionsBuilder {
    /// Set the page fetch timeout
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    /// Set the entity text prefix length
    pub fn entity_text_limit(mut self, limit: usize) -> Self {
        self.entity_text_limit = Some(limit);
        self
    }

    /// Set the number of entity texts kept for display
    pub fn entity_display_limit(mut self, limit: usize) -> Self {
        self.entity_display_limit = Some(limit);
        self
    }

    /// Set the outbound link policy
    pub fn link_policy(mut self, policy: ExternalLinkPolicy) -> Self {
        self.link_policy = Some(policy);
        self
    }

    /// Build the AuditOptions
    pub fn build(self) -> AuditOptions {
        let defaults = AuditOptions::default();
        AuditOptions {
            fetch_timeout: self.fetch_timeout.unwrap_or(defaults.fetch_timeout),
            entity_text_limit: self
                .entity_text_limit
                .unwrap_or(defaults.entity_text_limit),
            entity_display_limit: self
                .entity_display_limit
                .unwrap_or(defaults.entity_display_limit),
            link_policy: self.link_policy.unwrap_or(defaults.link_policy),
        }
    }
}
