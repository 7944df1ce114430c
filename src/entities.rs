//! Named-entity aggregation.
//!
//! Two capabilities feed the expertise score:
//!
//! - [`EntityRecognizer`]: a local, synchronous recognizer (see [`crate::NerModel`]).
//! - [`EntityAnnotator`]: a remote annotation service (see [`crate::DandelionAnnotator`]).
//!
//! [`aggregate_entities`] runs both over the same text prefix and merges the
//! results into an [`EntitySet`].

use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

/// Where an entity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitySource {
    Local,
    Remote,
}

/// A named entity found in page text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    /// Surface text as it appears in the page.
    pub text: String,
    /// Entity category, e.g. `DATE`, `ORG`, `Person`.
    pub label: String,
    pub source: EntitySource,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: impl Into<String>, source: EntitySource) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            source,
        }
    }
}

/// Local named-entity recognizer.
pub trait EntityRecognizer: Send + Sync {
    /// Entities found in `text`, in text order.
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Remote entity annotation service.
///
/// # Failure contract
///
/// Annotation is best-effort. Implementations report failures from
/// [`try_annotate`](EntityAnnotator::try_annotate); callers use
/// [`annotate`](EntityAnnotator::annotate), which turns every failure into an
/// empty list so an unreachable service never aborts an audit.
#[async_trait]
pub trait EntityAnnotator: Send + Sync {
    /// Annotate `text`, surfacing network, status and decoding failures.
    async fn try_annotate(&self, text: &str) -> Result<Vec<Entity>>;

    /// Annotate `text`, failing open to an empty list.
    async fn annotate(&self, text: &str) -> Vec<Entity> {
        match self.try_annotate(text).await {
            Ok(entities) => entities,
            Err(e) => {
                warn!(error = %e, "entity annotation failed, continuing without remote entities");
                Vec::new()
            }
        }
    }
}

/// Annotator used when no remote service is configured. Contributes nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledAnnotator;

#[async_trait]
impl EntityAnnotator for DisabledAnnotator {
    async fn try_annotate(&self, _text: &str) -> Result<Vec<Entity>> {
        Ok(Vec::new())
    }
}

/// Entities merged from the local and remote sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntitySet {
    /// Every entity from both sources; duplicates across sources are kept.
    pub entities: Vec<Entity>,
    /// Unique entity texts in first-seen order, capped at the display limit.
    pub display: Vec<String>,
}

impl EntitySet {
    /// Merge local and remote entities. Local entities come first.
    pub fn merge(local: Vec<Entity>, remote: Vec<Entity>, display_limit: usize) -> Self {
        let mut entities = local;
        entities.extend(remote);

        let mut display: Vec<String> = Vec::new();
        for entity in &entities {
            if display.len() == display_limit {
                break;
            }
            if !display.iter().any(|seen| seen == &entity.text) {
                display.push(entity.text.clone());
            }
        }

        Self { entities, display }
    }

    /// Combined entity count used for scoring.
    pub fn count(&self) -> usize {
        self.entities.len()
    }

    pub fn count_from(&self, source: EntitySource) -> usize {
        self.entities.iter().filter(|e| e.source == source).count()
    }
}

/// Run the recognizer and annotator over `text` and merge their entities.
///
/// `text` is expected to be the already truncated page prefix.
pub async fn aggregate_entities(
    text: &str,
    recognizer: &dyn EntityRecognizer,
    annotator: &dyn EntityAnnotator,
    display_limit: usize,
) -> EntitySet {
    let local = recognizer.recognize(text);
    let remote = annotator.annotate(text).await;

    let set = EntitySet::merge(local, remote, display_limit);
    debug!(
        local = set.count_from(EntitySource::Local),
        remote = set.count_from(EntitySource::Remote),
        display = set.display.len(),
        "entities aggregated"
    );
    set
}
