//! Connector settings.
//!
//! Persisted as JSON in the user configuration directory. A missing file
//! yields the defaults: production mode, threshold 0.5, order flagging on.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uvb_client::{
    Classifier, ClientConfig, Credentials, Environment, ReasonTable, ResponseSchema, WarningBand,
};

use crate::credentials;
use crate::error::{Error, Result};

/// Default minimum reputation accepted without flagging.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Connector settings.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Service public key.
    pub public_key: String,
    /// Service private key. Empty when kept in the system keyring.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub private_key: String,
    /// Use the sandbox service.
    pub sandbox_mode: bool,
    /// Minimum acceptable reputation, in `[-1, 1]`.
    pub reputation_threshold: f64,
    /// Check new orders and store a flag for them.
    pub flag_orders: bool,
    /// Response schema of the service account.
    pub response_schema: ResponseSchema,
    /// Warning band of the rate scheme.
    pub warning_band: WarningBand,
    /// Use the strict reason table.
    pub strict_reasons: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            private_key: String::new(),
            sandbox_mode: false,
            reputation_threshold: DEFAULT_THRESHOLD,
            flag_orders: true,
            response_schema: ResponseSchema::default(),
            warning_band: WarningBand::default(),
            strict_reasons: false,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("sandbox_mode", &self.sandbox_mode)
            .field("reputation_threshold", &self.reputation_threshold)
            .field("flag_orders", &self.flag_orders)
            .field("response_schema", &self.response_schema)
            .field("warning_band", &self.warning_band)
            .field("strict_reasons", &self.strict_reasons)
            .finish()
    }
}

impl Settings {
    /// Default settings file location (`<config_dir>/uvb/settings.json`).
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("uvb")
            .join("settings.json")
    }

    /// Loads settings from `path`, falling back to defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self> {
        if !tokio::fs::try_exists(path).await? {
            tracing::debug!(?path, "No settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Saves settings to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, contents).await?;

        tracing::info!(?path, "Settings saved");
        Ok(())
    }

    /// Checks the settings for values the client would reject.
    ///
    /// The private key is not checked here: an empty value means the key is
    /// kept in the system keyring, and [`Settings::credentials`] resolves it.
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.public_key.trim().is_empty() {
            return Err(Error::Config("public key is required".into()));
        }
        let threshold = self.reputation_threshold;
        if !threshold.is_finite() || !(-1.0..=1.0).contains(&threshold) {
            return Err(Error::Config(format!(
                "reputation threshold must be between -1 and 1, got {threshold}"
            )));
        }
        let width = match self.warning_band {
            WarningBand::Absolute(width) | WarningBand::Relative(width) => width,
        };
        if !width.is_finite() || width < 0.0 {
            return Err(Error::Config(format!(
                "warning band must be a non-negative number, got {width}"
            )));
        }
        Ok(())
    }

    /// Resolves the API credentials.
    ///
    /// Uses the private key from the settings file, or the system keyring
    /// when the file holds none.
    ///
    /// # Errors
    ///
    /// Returns an error if no private key is available.
    pub fn credentials(&self) -> Result<Credentials> {
        if !self.private_key.is_empty() {
            return Ok(Credentials::new(&self.public_key, &self.private_key));
        }

        let private_key = credentials::get_private_key(&self.public_key)?
            .ok_or_else(|| Error::Config("private key is not configured".into()))?;
        Ok(Credentials::new(&self.public_key, private_key))
    }

    /// Client configuration derived from these settings.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_environment(Environment::from_sandbox(self.sandbox_mode))
            .with_schema(self.response_schema)
    }

    /// Classifier derived from these settings.
    #[must_use]
    pub fn classifier(&self) -> Classifier {
        let reasons = if self.strict_reasons {
            ReasonTable::strict()
        } else {
            ReasonTable::standard()
        };
        Classifier::new()
            .with_band(self.warning_band)
            .with_reasons(reasons)
    }
}
