//! The [`Auditor`], which runs the whole audit pipeline for one URL.
//!
//! ## Example
//!
//! ```rust,no_run
//! use eeat_audit::{AuditOptions, Auditor};
//!
//! # async fn run() -> eeat_audit::Result<()> {
//! let auditor = Auditor::new(AuditOptions::default())?;
//! let report = auditor.run("https://example.com").await?;
//!
//! println!("Total: {}/20", report.scores.total);
//! report.write_pdf("eeat_audit_report.pdf")?;
//! # Ok(())
//! # }
//! ```

use crate::{
    domain::{domain_of, estimate_domain_authority, reputation_links},
    entities::{aggregate_entities, DisabledAnnotator, EntityAnnotator, EntityRecognizer},
    error::Result,
    fetcher::{HttpFetcher, PageSource},
    ner::NerModel,
    options::AuditOptions,
    report::Report,
    scoring::ScoreCard,
    signals::extract_signals,
};
use std::sync::Arc;
use tracing::info;

/// Runs audits: fetch, extract, aggregate entities, score, report.
///
/// By default pages are fetched over HTTP, local entities come from the shared
/// [`NerModel`] and no remote annotator is used. Each stage can be replaced:
///
/// ```rust,no_run
/// use eeat_audit::{ApiToken, AuditOptions, Auditor, DandelionAnnotator};
///
/// # fn build() -> eeat_audit::Result<Auditor> {
/// let annotator = DandelionAnnotator::new(ApiToken::new("token"))?;
/// let auditor = Auditor::new(AuditOptions::default())?.with_annotator(annotator);
/// # Ok(auditor)
/// # }
/// ```
pub struct Auditor {
    source: Box<dyn PageSource>,
    recognizer: Arc<dyn EntityRecognizer>,
    annotator: Box<dyn EntityAnnotator>,
    options: AuditOptions,
}

impl Auditor {
    /// Create an auditor with the default stages.
    pub fn new(options: AuditOptions) -> Result<Self> {
        let source = HttpFetcher::new(options.fetch_timeout)?;
        Ok(Self {
            source: Box::new(source),
            recognizer: NerModel::shared(),
            annotator: Box::new(DisabledAnnotator),
            options,
        })
    }

    pub fn with_page_source(mut self, source: impl PageSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    pub fn with_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }

    pub fn with_annotator(mut self, annotator: impl EntityAnnotator + 'static) -> Self {
        self.annotator = Box::new(annotator);
        self
    }

    /// Fetch and audit `url`.
    ///
    /// The URL is validated before any network access. Fetch failures abort
    /// the audit; remote annotation failures do not.
    pub async fn run(&self, url: &str) -> Result<Report> {
        domain_of(url)?;
        info!(url = %url, "audit starting");

        let page = self.source.fetch(url).await?;
        self.audit_html(url, &page.html).await
    }

    /// Audit already-fetched `html` as if it had been served from `url`.
    pub async fn audit_html(&self, url: &str, html: &str) -> Result<Report> {
        let domain = domain_of(url)?;

        let signals = extract_signals(html, url, &self.options);
        let entities = aggregate_entities(
            &signals.raw_text,
            self.recognizer.as_ref(),
            self.annotator.as_ref(),
            self.options.entity_display_limit,
        )
        .await;

        let scores = ScoreCard::score(&signals, &entities);
        let authority = estimate_domain_authority(&domain);
        let links = reputation_links(&domain);

        info!(
            url = %url,
            experience = scores.experience,
            expertise = scores.expertise,
            authoritativeness = scores.authoritativeness,
            trustworthiness = scores.trustworthiness,
            total = scores.total,
            "audit complete"
        );

        Ok(Report::new(
            url, domain, &signals, &entities, scores, authority, links,
        ))
    }
}
