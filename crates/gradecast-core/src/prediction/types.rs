use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GradecastError, Result};
use crate::field_map::FieldMap;
use crate::form::FieldConstraint;

pub const PREDICTION_FAILED: &str = "Prediction failed";

/// Successful `POST /predict` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: String,
    /// Category -> formatted percentage, in server order.
    pub probabilities: FieldMap<String>,
    pub features_used: FieldMap<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_ranges: Option<RangeSummary>,
}

/// Non-200 `POST /predict` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerError {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Result of one prediction round trip.
pub type PredictionOutcome = Result<PredictionResponse>;

/// `GET /ranges`: feature -> bounds.
pub type RangeSummary = FieldMap<FieldConstraint>;

/// `GET /sample`: feature -> example value.
pub type SampleValues = FieldMap<Value>;

/// `GET /classes`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassList {
    #[serde(default)]
    pub classes: Vec<String>,
}

/// Turn a `/predict` status and body into a typed outcome.
///
/// Error bodies without an `error` field, or that are not JSON at all,
/// fall back to a generic message. A success body that cannot be read is
/// reported like a failed fetch.
pub fn decode_prediction(status: u16, body: &str) -> PredictionOutcome {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| GradecastError::Network(e.to_string()));
    }

    let parsed = serde_json::from_str::<ServerError>(body).ok();
    let (message, details) = match parsed {
        Some(ServerError {
            error: Some(message),
            details,
        }) => (message, details),
        Some(ServerError {
            error: None,
            details,
        }) => (PREDICTION_FAILED.to_string(), details),
        None => (PREDICTION_FAILED.to_string(), Vec::new()),
    };

    Err(GradecastError::Server {
        status,
        message,
        details,
    })
}
