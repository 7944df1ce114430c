//! Fixed constants shared across the audit pipeline.

/// URL audited when none is given.
pub const DEFAULT_AUDIT_URL: &str = "https://example.com";

/// File name of the exported report. Each run overwrites the previous file.
pub const REPORT_FILE_NAME: &str = "eeat_audit_report.pdf";

/// Title line of the exported report.
pub const REPORT_TITLE: &str = "E-E-A-T Audit Report";

/// Display form of a missing "last updated" signal.
pub const NOT_FOUND_TEXT: &str = "Not found";

/// Search engine used for reputation queries.
pub const SEARCH_ENGINE_URL: &str = "https://www.google.com/search";

/// Reputation sites as `(label, site domain)`, in display order.
pub const REPUTATION_SITES: [(&str, &str); 4] = [
    ("Reddit", "reddit.com"),
    ("Wikipedia", "wikipedia.org"),
    ("TrustPilot", "trustpilot.com"),
    ("Quora", "quora.com"),
];

/// Dandelion entity extraction endpoint.
pub const DANDELION_ENDPOINT: &str = "https://api.dandelion.eu/datatxt/nex/v1/";

/// Environment variable holding the Dandelion API token.
pub const DANDELION_TOKEN_ENV: &str = "DANDELION_TOKEN";

/// Case-insensitive class substrings marking authorship and author bios.
pub const AUTHOR_CLASS_MARKER: &str = "author";
pub const BIO_CLASS_MARKER: &str = "bio";

/// Case-insensitive text marker for "last updated" elements.
pub const UPDATE_TEXT_MARKER: &str = "update";

/// Elements scanned, in document order, for the update marker.
pub const UPDATE_CANDIDATE_SELECTOR: &str = "time, span, p";

/// Elements whose text never counts as page text.
pub const NON_CONTENT_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];
