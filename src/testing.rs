//! Testing utilities including stub implementations.
//!
//! These let applications and tests run the audit pipeline without real
//! network calls.

use async_trait::async_trait;

use crate::entities::{Entity, EntityAnnotator, EntityRecognizer, EntitySource};
use crate::error::{AuditError, Result};
use crate::fetcher::{FetchedPage, PageSource};

/// Page source that serves the same HTML for every URL.
#[derive(Debug, Clone)]
pub struct StaticPage {
    html: String,
}

impl StaticPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

#[async_trait]
impl PageSource for StaticPage {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        Ok(FetchedPage {
            final_url: url.to_string(),
            status: 200,
            html: self.html.clone(),
        })
    }
}

/// Page source that always fails with the given status.
#[derive(Debug, Clone, Copy)]
pub struct FailingPage {
    pub status: u16,
}

#[async_trait]
impl PageSource for FailingPage {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        Err(AuditError::HttpStatus {
            url: url.to_string(),
            status: self.status,
        })
    }
}

/// Recognizer returning a fixed entity list regardless of input.
#[derive(Debug, Clone, Default)]
pub struct FixedRecognizer(pub Vec<Entity>);

impl FixedRecognizer {
    /// `count` distinct local entities named `Local 0`, `Local 1`, ...
    pub fn with_count(count: usize) -> Self {
        Self(
            (0..count)
                .map(|i| Entity::new(format!("Local {i}"), "NAME", EntitySource::Local))
                .collect(),
        )
    }
}

impl EntityRecognizer for FixedRecognizer {
    fn recognize(&self, _text: &str) -> Vec<Entity> {
        self.0.clone()
    }
}

/// Annotator returning a fixed entity list regardless of input.
#[derive(Debug, Clone, Default)]
pub struct FixedAnnotator(pub Vec<Entity>);

impl FixedAnnotator {
    /// `count` distinct remote entities named `Remote 0`, `Remote 1`, ...
    pub fn with_count(count: usize) -> Self {
        Self(
            (0..count)
                .map(|i| Entity::new(format!("Remote {i}"), "Thing", EntitySource::Remote))
                .collect(),
        )
    }
}

#[async_trait]
impl EntityAnnotator for FixedAnnotator {
    async fn try_annotate(&self, _text: &str) -> Result<Vec<Entity>> {
        Ok(self.0.clone())
    }
}

/// Annotator whose every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingAnnotator;

#[async_trait]
impl EntityAnnotator for FailingAnnotator {
    async fn try_annotate(&self, _text: &str) -> Result<Vec<Entity>> {
        Err(AuditError::Annotation("service unavailable".to_string()))
    }
}
