//! API token handling.

use crate::constants::DANDELION_TOKEN_ENV;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

const REDACTED: &str = "ApiToken(***)";

/// Token for the remote annotation service. Formatting never prints the value.
pub struct ApiToken(SecretString);

impl ApiToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// Token from `DANDELION_TOKEN`, if set to something other than whitespace.
    pub fn dandelion_from_env() -> Option<Self> {
        Self::from_env(DANDELION_TOKEN_ENV)
    }

    pub fn from_env(key: &str) -> Option<Self> {
        let value = std::env::var(key).ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| Self::new(value))
    }

    /// Raw token for the request query.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for ApiToken {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}
