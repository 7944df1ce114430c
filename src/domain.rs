//! Domain-level helpers: network location, reputation searches and the
//! domain authority estimate. None of these touch the network.

use crate::constants::{REPUTATION_SITES, SEARCH_ENGINE_URL};
use crate::error::{AuditError, Result};
use indexmap::IndexMap;
use url::Url;

/// Search URLs keyed by reputation site label, in display order.
pub type ReputationLinks = IndexMap<String, String>;

/// Network location of `url`: host, plus `:port` for a non-default port.
///
/// The host comes back normalized by the `url` parser: lowercased, without
/// userinfo, and punycode-encoded for internationalized names. Since
/// [`estimate_domain_authority`] matches case-sensitively, audits of
/// `https://En.WIKIPEDIA.org/` still land in the `wikipedia` tier.
pub fn domain_of(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|_| AuditError::InvalidUrl(url.to_string()))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| AuditError::InvalidUrl(url.to_string()))?;

    Ok(match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Search-engine queries looking for `domain` on each reputation site.
pub fn reputation_links(domain: &str) -> ReputationLinks {
    REPUTATION_SITES
        .iter()
        .map(|(label, site)| {
            (
                label.to_string(),
                format!("{SEARCH_ENGINE_URL}?q=site:{site}+{domain}"),
            )
        })
        .collect()
}

/// Coarse trust tier for a domain. The first matching rule wins.
///
/// | Domain contains                      | Estimate |
/// |--------------------------------------|----------|
/// | `wikipedia`                          | 90       |
/// | `gov` or `edu`                       | 80       |
/// | `wordpress.com` or `medium.com`      | 60       |
/// | anything else                        | 40       |
pub fn estimate_domain_authority(domain: &str) -> u8 {
    if domain.contains("wikipedia") {
        90
    } else if domain.contains("gov") || domain.contains("edu") {
        80
    } else if domain.contains("wordpress.com") || domain.contains("medium.com") {
        60
    } else {
        40
    }
}
