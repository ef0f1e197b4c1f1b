use serde::{Deserialize, Serialize};

use crate::error::{GradecastError, Result};

pub const DEFAULT_HOST: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradecastConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl GradecastConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| GradecastError::Config(e.to_string()))
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.server.host = host.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Join an endpoint path onto the host, tolerating a trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.host.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Character width of a 100% probability bar in text output.
    pub bar_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { bar_width: 30 }
    }
}
