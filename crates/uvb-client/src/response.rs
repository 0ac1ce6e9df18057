//! Response schemas of the `/request` endpoint.
//!
//! The service exposed two shapes over its lifetime. The client is
//! configured with exactly one [`ResponseSchema`] and rejects bodies that
//! do not match it.

use serde::{Deserialize, Serialize};

use crate::classify::Assessment;
use crate::error::Result;

/// Which response shape the `/request` endpoint is expected to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseSchema {
    /// `{"result": {"reputation", "reason", "blocked"}}`
    #[default]
    Reason,
    /// `{"message": {"totalRate"}}`
    Rate,
}

/// Reason-based check result.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReasonResult {
    /// Computed reputation score.
    pub reputation: f64,
    /// Discrete reason message.
    pub reason: String,
    /// Whether the service recommends blocking the buyer.
    #[serde(default)]
    pub blocked: bool,
}

/// Rate-based check result.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResult {
    /// Aggregated reputation rate.
    pub total_rate: f64,
}

#[derive(Deserialize)]
struct ReasonEnvelope {
    result: ReasonResult,
}

#[derive(Deserialize)]
struct RateEnvelope {
    message: RateResult,
}

/// Decoded answer of a reputation check.
#[derive(Debug, Clone, PartialEq)]
pub enum Reputation {
    /// Reason-based answer.
    Reason(ReasonResult),
    /// Rate-based answer.
    Rate(RateResult),
}

impl Reputation {
    /// Decodes a response body according to `schema`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON of that schema.
    pub fn decode(schema: ResponseSchema, body: &[u8]) -> Result<Self> {
        Ok(match schema {
            ResponseSchema::Reason => {
                Self::Reason(serde_json::from_slice::<ReasonEnvelope>(body)?.result)
            }
            ResponseSchema::Rate => {
                Self::Rate(serde_json::from_slice::<RateEnvelope>(body)?.message)
            }
        })
    }

    /// Returns the numeric score carried by the answer.
    #[must_use]
    pub const fn score(&self) -> f64 {
        match self {
            Self::Reason(result) => result.reputation,
            Self::Rate(result) => result.total_rate,
        }
    }

    /// Returns true if the score is below `threshold`.
    #[must_use]
    pub fn is_below(&self, threshold: f64) -> bool {
        self.score() < threshold
    }

    /// Converts the answer into classifier input.
    #[must_use]
    pub fn assessment(&self, threshold: f64) -> Assessment {
        match self {
            Self::Reason(result) => Assessment::ReasonBased {
                reason: result.reason.clone(),
            },
            Self::Rate(result) => Assessment::RateBased {
                rate: result.total_rate,
                threshold,
            },
        }
    }
}
