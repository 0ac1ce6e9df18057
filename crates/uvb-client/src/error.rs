//! Error types for reputation service operations.

/// Result type alias for reputation service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reputation client error types.
///
/// Only [`Error::InvalidArgument`] and [`Error::InvalidConfig`] are returned
/// from the public client operations. Transport-class errors are logged and
/// degrade to an absent result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller supplied a malformed argument. Raised before any network call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// HTTP request error (connect, TLS, timeout, redirect limit).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// Response body did not match the expected schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL construction error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns true for errors that are treated as "no answer" from the service.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status(_) | Self::Json(_))
    }
}

/// Validation failures for request parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidArgument {
    /// Email address is empty.
    #[error("email required")]
    EmailRequired,

    /// Threshold is not a finite number in `[-1, 1]`.
    #[error("threshold out of range: {0}")]
    ThresholdOutOfRange(f64),

    /// Outcome is neither `-1` nor `+1`.
    #[error("outcome not allowed: {0} (possible values: -1, 1)")]
    InvalidOutcome(i64),

    /// Order ID is empty.
    #[error("order id required")]
    OrderIdRequired,
}
