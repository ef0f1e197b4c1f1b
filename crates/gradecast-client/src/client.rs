use std::time::Duration;

use gradecast_core::{
    decode_prediction, ClassList, DatasetStats, FormSubmission, GpaBands, GradecastError,
    PredictionOutcome, RangeSummary, SampleValues, ServerConfig,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("Failed to read response: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error("Connection refused - is the prediction server running?")]
    ConnectionRefused,
}

impl From<ClientError> for GradecastError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Json(e) => GradecastError::Decode(e.to_string()),
            ClientError::Status(status) => GradecastError::Server {
                status,
                message: format!("Server responded with status {}", status),
                details: Vec::new(),
            },
            other => GradecastError::Network(other.to_string()),
        }
    }
}

/// Blocking client for the prediction service endpoints.
pub struct PredictorClient {
    config: ServerConfig,
    agent: ureq::Agent,
}

impl PredictorClient {
    pub fn new(config: ServerConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self { config, agent }
    }

    pub fn with_host(host: impl Into<String>) -> Self {
        Self::new(ServerConfig {
            host: host.into(),
            ..ServerConfig::default()
        })
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    #[instrument(skip(self), fields(host = %self.config.host))]
    pub fn fetch_ranges(&self) -> Result<RangeSummary, ClientError> {
        let ranges: RangeSummary = self.get_json("ranges")?;
        info!(count = ranges.len(), "Fetched valid ranges");
        Ok(ranges)
    }

    #[instrument(skip(self), fields(host = %self.config.host))]
    pub fn fetch_sample(&self) -> Result<SampleValues, ClientError> {
        let sample: SampleValues = self.get_json("sample")?;
        debug!(count = sample.len(), "Fetched sample values");
        Ok(sample)
    }

    #[instrument(skip(self), fields(host = %self.config.host))]
    pub fn fetch_classes(&self) -> Result<ClassList, ClientError> {
        self.get_json("classes")
    }

    #[instrument(skip(self), fields(host = %self.config.host))]
    pub fn fetch_gpa_bands(&self) -> Result<GpaBands, ClientError> {
        self.get_json("gpa_info")
    }

    #[instrument(skip(self), fields(host = %self.config.host))]
    pub fn fetch_dataset_stats(&self) -> Result<DatasetStats, ClientError> {
        self.get_json("dataset_stats")
    }

    /// Post the form. Server-reported failures keep their message verbatim;
    /// transport failures become network errors.
    #[instrument(skip(self, submission), fields(seq = submission.seq))]
    pub fn predict(&self, submission: &FormSubmission) -> PredictionOutcome {
        let url = self.config.endpoint("predict");
        debug!("Posting prediction form");

        let response = self
            .agent
            .post(&url)
            .set("Content-Type", FORM_CONTENT_TYPE)
            .send_string(&submission.encode());

        let (status, body) = match response {
            Ok(r) => (r.status(), r.into_string()),
            Err(ureq::Error::Status(code, r)) => (code, r.into_string()),
            Err(e) => {
                return Err(map_ureq_error(e, "Prediction request failed").into());
            }
        };

        let body = body.map_err(ClientError::from)?;
        debug!(status, "Prediction response received");
        decode_prediction(status, &body)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.config.endpoint(path);
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| map_ureq_error(e, "Connection refused - prediction server not running?"))?;
        let body = response.into_string()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for PredictorClient {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

/// Map ureq errors to ClientError, detecting connection failures
fn map_ureq_error(e: ureq::Error, context: &str) -> ClientError {
    if let ureq::Error::Status(code, _) = e {
        error!(status = code, "{}", context);
        return ClientError::Status(code);
    }

    let ureq::Error::Transport(ref t) = e else {
        error!("HTTP error: {}", e);
        return ClientError::Http(e);
    };

    if t.kind() == ureq::ErrorKind::ConnectionFailed {
        error!("{}", context);
        return ClientError::ConnectionRefused;
    }

    error!("HTTP error: {}", e);
    ClientError::Http(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_mapping() {
        let err: GradecastError = ClientError::ConnectionRefused.into();
        assert_eq!(
            err.to_string(),
            "Network error: Connection refused - is the prediction server running?"
        );

        let err: GradecastError = ClientError::Status(503).into();
        assert!(matches!(err, GradecastError::Server { status: 503, .. }));

        let json = serde_json::from_str::<u32>("x").unwrap_err();
        let err: GradecastError = ClientError::Json(json).into();
        assert!(matches!(err, GradecastError::Decode(_)));
    }

    #[test]
    fn test_host_accessor() {
        let client = PredictorClient::with_host("http://127.0.0.1:9");
        assert_eq!(client.host(), "http://127.0.0.1:9");
    }
}
