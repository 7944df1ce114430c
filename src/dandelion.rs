//! Remote entity annotation through the Dandelion entity extraction API.

use crate::constants::DANDELION_ENDPOINT;
use crate::credentials::ApiToken;
use crate::entities::{Entity, EntityAnnotator, EntitySource};
use crate::error::{AuditError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Annotation fields requested alongside each entity.
const INCLUDE_FIELDS: &str = "types,abstract,categories";

/// Language the page text is annotated as.
const LANG: &str = "en";

/// Annotations below this confidence are dropped by the service.
const MIN_CONFIDENCE: &str = "0.6";

/// Label used when an annotation carries no type.
const UNTYPED_LABEL: &str = "ENTITY";

#[derive(Debug, Deserialize)]
struct NexResponse {
    #[serde(default)]
    annotations: Vec<NexAnnotation>,
}

#[derive(Debug, Deserialize)]
struct NexAnnotation {
    spot: String,
    #[serde(default)]
    types: Vec<String>,
}

impl NexAnnotation {
    /// Last path segment of the first type URI, e.g. `City` for
    /// `http://dbpedia.org/ontology/City`.
    fn label(&self) -> &str {
        self.types
            .first()
            .and_then(|uri| uri.trim_end_matches('/').rsplit('/').next())
            .filter(|segment| !segment.is_empty())
            .unwrap_or(UNTYPED_LABEL)
    }
}

/// [`EntityAnnotator`] backed by Dandelion's `datatxt/nex` endpoint.
///
/// ```rust,no_run
/// use eeat_audit::{ApiToken, DandelionAnnotator, EntityAnnotator};
///
/// # async fn run() -> eeat_audit::Result<()> {
/// let annotator = DandelionAnnotator::new(ApiToken::new("token"))?;
/// let entities = annotator.annotate("Rome is the capital of Italy.").await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DandelionAnnotator {
    client: reqwest::Client,
    endpoint: String,
    token: ApiToken,
}

impl DandelionAnnotator {
    /// Annotator with a 10 second timeout, English text and 0.6 minimum confidence.
    pub fn new(token: ApiToken) -> Result<Self> {
        Self::with_timeout(token, Duration::from_secs(10))
    }

    pub fn with_timeout(token: ApiToken, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuditError::Config(format!("annotation client: {e}")))?;

        Ok(Self {
            client,
            endpoint: DANDELION_ENDPOINT.to_string(),
            token,
        })
    }

    /// Point the annotator at another endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl EntityAnnotator for DandelionAnnotator {
    async fn try_annotate(&self, text: &str) -> Result<Vec<Entity>> {
        let params = [
            ("text", text),
            ("lang", LANG),
            ("min_confidence", MIN_CONFIDENCE),
            ("include", INCLUDE_FIELDS),
            ("token", self.token.expose()),
        ];

        // The request URL carries the token, so it is stripped from every error.
        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AuditError::Annotation(e.without_url().to_string()))?;

        let body: NexResponse = response
            .json()
            .await
            .map_err(|e| AuditError::Annotation(e.without_url().to_string()))?;

        let entities: Vec<Entity> = body
            .annotations
            .iter()
            .map(|annotation| Entity::new(&annotation.spot, annotation.label(), EntitySource::Remote))
            .collect();

        debug!(count = entities.len(), "remote entities annotated");
        Ok(entities)
    }
}
