//! # eeat-audit
//!
//! Heuristic E-E-A-T (Experience, Expertise, Authoritativeness, Trustworthiness)
//! auditing for a single web page.
//!
//! ## Overview
//!
//! An audit fetches one page, extracts lightweight signals from its HTML and
//! turns them into four integer scores between 0 and 5, summed into a total out
//! of 20. The scores are coarse heuristics with fixed thresholds, not a
//! calibrated quality metric.
//!
//! ## Key Features
//!
//! - **Signal Extraction**: author and bio markers, "last updated" text, outbound links,
//!   JSON-LD schema types and leading page text
//! - **Entity Aggregation**: a local rule-based recognizer plus an optional remote
//!   annotation service that fails open
//! - **Scoring**: four pure, bounded scoring functions
//! - **Domain Helpers**: reputation search links and a domain authority estimate
//! - **Reports**: terminal rendering, PDF export and JSON serialization
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use eeat_audit::{AuditOptions, Auditor};
//!
//! # async fn run() -> eeat_audit::Result<()> {
//! let auditor = Auditor::new(AuditOptions::default())?;
//! let report = auditor.run("https://example.com").await?;
//!
//! println!("Experience: {}/5", report.scores.experience);
//! println!("Total: {}/20", report.scores.total);
//! # Ok(())
//! # }
//! ```
//!
//! ## Scoring Without Fetching
//!
//! The extraction and scoring steps are plain functions and can be used on
//! their own:
//!
//! ```rust
//! use eeat_audit::{extract_signals, score_authoritativeness, score_trustworthiness, AuditOptions};
//!
//! let html = r#"
//!     <script type="application/ld+json">{"@type": "Organization"}</script>
//!     <a href="https://other.org/">Source</a>
//! "#;
//! let signals = extract_signals(html, "https://example.com", &AuditOptions::default());
//!
//! assert_eq!(score_authoritativeness(&signals.schema_types), 2);
//! assert_eq!(score_trustworthiness(signals.outbound_links.len()), 1);
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use eeat_audit::{AuditError, AuditOptions, Auditor};
//!
//! # async fn run() -> eeat_audit::Result<()> {
//! let auditor = Auditor::new(AuditOptions::default())?;
//!
//! match auditor.run("https://example.com/missing").await {
//!     Ok(report) => println!("Total: {}", report.scores.total),
//!     Err(AuditError::HttpStatus { status, .. }) => eprintln!("Server said {}", status),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod audit;
mod constants;
mod credentials;
mod dandelion;
mod domain;
mod entities;
mod error;
mod fetcher;
mod layout;
mod ner;
mod options;
mod render;
mod report;
mod scoring;
mod signals;
pub mod testing;
mod utils;

// Public exports
pub use audit::Auditor;
pub use constants::{DEFAULT_AUDIT_URL, REPORT_FILE_NAME};
pub use credentials::ApiToken;
pub use dandelion::DandelionAnnotator;
pub use domain::{domain_of, estimate_domain_authority, reputation_links, ReputationLinks};
pub use entities::{
    aggregate_entities, DisabledAnnotator, Entity, EntityAnnotator, EntityRecognizer, EntitySet,
    EntitySource,
};
pub use error::{AuditError, Result};
pub use fetcher::{FetchedPage, HttpFetcher, PageSource};
pub use ner::NerModel;
pub use options::{AuditOptions, AuditOptionsBuilder, ExternalLinkPolicy};
pub use render::{progress_bar, render_report};
pub use report::Report;
pub use scoring::{
    score_authoritativeness, score_experience, score_expertise, score_trustworthiness, ScoreCard,
    MAX_DIMENSION_SCORE, MAX_TOTAL_SCORE,
};
pub use signals::{extract_signals, ExtractedSignals, LastUpdated};
