use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RlaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render failed at {resolution}: {message}")]
    Render { resolution: String, message: String },

    #[error("Screenshot capture failed: {0}")]
    Screenshot(String),

    #[error("Issue grouping failed: {0}")]
    Grouping(String),

    #[error("Report generation failed: {0}")]
    ReportGeneration(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl RlaError {
    pub fn render(resolution: impl Into<String>, message: impl Into<String>) -> Self {
        RlaError::Render {
            resolution: resolution.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        RlaError::Config(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            RlaError::Io(e) => ErrorPayload::new(
                ErrorCategory::Io,
                e.to_string(),
                "Check output paths and filesystem permissions.",
            ),
            RlaError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check the report payload for non-serializable detail values.",
            ),
            RlaError::Render { resolution, message } => ErrorPayload::new(
                ErrorCategory::Render,
                format!("Render failed at {}: {}", resolution, message),
                "Verify the markup is a complete document and raise the per-render timeout if the renderer is slow.",
            ),
            RlaError::Screenshot(msg) => ErrorPayload::new(
                ErrorCategory::Render,
                msg.to_string(),
                "Ensure the output directory exists and is writable.",
            ),
            RlaError::Grouping(msg) => ErrorPayload::new(
                ErrorCategory::Analysis,
                msg.to_string(),
                "The grouping engine rejected the filtered issue list; inspect its logs.",
            ),
            RlaError::ReportGeneration(msg) => ErrorPayload::new(
                ErrorCategory::Analysis,
                msg.to_string(),
                "Check the report output path and the generator's requirements.",
            ),
            RlaError::Config(msg) => ErrorPayload::new(
                ErrorCategory::Config,
                msg.to_string(),
                "Check resolutions, timeout, and output path settings.",
            ),
            RlaError::Unknown(msg) => ErrorPayload::new(
                ErrorCategory::Unknown,
                msg.to_string(),
                "File an issue if persistent.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, RlaError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Render,
    Analysis,
    Io,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
