//! Client configuration: service environment, credentials and HTTP policy.

use std::fmt;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};
use crate::response::ResponseSchema;

/// Production API base URL.
pub const PRODUCTION_BASE_URL: &str = "https://utanvet-ellenor.hu/api/v2";

/// Sandbox API base URL.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.utanvet-ellenor.hu/api/v2";

/// Default total request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default maximum number of redirects followed.
pub const DEFAULT_MAX_REDIRECTS: usize = 3;

/// Service environment selecting the API host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Live service.
    #[default]
    Production,
    /// Test service.
    Sandbox,
}

impl Environment {
    /// Selects the environment from a sandbox flag.
    #[must_use]
    pub const fn from_sandbox(sandbox: bool) -> Self {
        if sandbox { Self::Sandbox } else { Self::Production }
    }

    /// Returns the API base URL for this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Sandbox => SANDBOX_BASE_URL,
        }
    }

    /// Builds the full URL of an API endpoint (e.g. `/request`).
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting URL is invalid.
    pub fn endpoint(self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{path}", self.base_url()))?)
    }
}

/// API key pair issued by the reputation service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Returns the public key.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Returns the `Authorization` header value.
    ///
    /// Format: `Basic base64(public_key:private_key)`
    #[must_use]
    pub fn authorization(&self) -> String {
        let raw = format!("{}:{}", self.public_key, self.private_key);
        format!("Basic {}", STANDARD.encode(raw))
    }

    /// Checks that both keys are present.
    ///
    /// # Errors
    ///
    /// Returns an error if either key is empty.
    pub fn validate(&self) -> Result<()> {
        if self.public_key.trim().is_empty() {
            return Err(Error::InvalidConfig("public key is empty".into()));
        }
        if self.private_key.trim().is_empty() {
            return Err(Error::InvalidConfig("private key is empty".into()));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Reputation client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Target environment.
    pub environment: Environment,
    /// Response schema expected from `/request`.
    pub schema: ResponseSchema,
    /// Total request timeout.
    pub timeout: Duration,
    /// Maximum number of redirects followed.
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            schema: ResponseSchema::default(),
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl ClientConfig {
    /// Sets the environment.
    #[must_use]
    pub const fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets the response schema.
    #[must_use]
    pub const fn with_schema(mut self, schema: ResponseSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the redirect limit.
    #[must_use]
    pub const fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }
}
