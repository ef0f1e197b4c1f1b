use thiserror::Error;

/// Banner-level failures. Cloneable so the controller can keep one in its view state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradecastError {
    #[error("Please fix validation errors before submitting.")]
    InvalidInputs { fields: Vec<String> },

    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        details: Vec<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to load sample data: {0}")]
    SampleUnavailable(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid constraint for {field}: min {min} exceeds max {max}")]
    Constraint { field: String, min: f64, max: f64 },

    #[error("Config error: {0}")]
    Config(String),
}

impl GradecastError {
    /// Extra lines shown under the banner message.
    pub fn details(&self) -> &[String] {
        match self {
            GradecastError::Server { details, .. } => details,
            GradecastError::InvalidInputs { fields } => fields,
            _ => &[],
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, GradecastError::Network(_))
    }
}

impl From<serde_json::Error> for GradecastError {
    fn from(e: serde_json::Error) -> Self {
        GradecastError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GradecastError>;
