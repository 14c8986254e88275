use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NexpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No symbol master with id {symbol_id} (referenced by '{instance}')")]
    MissingSymbolMaster { symbol_id: String, instance: String },

    #[error("Asset export error: {0}")]
    Asset(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NexpError {
    pub fn asset(message: impl Into<String>) -> Self {
        NexpError::Asset(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            NexpError::Io(e) => ErrorPayload::new(
                ErrorCategory::Io,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            NexpError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Document,
                e.to_string(),
                "Check that the document snapshot is valid JSON; run with --verbose for details.",
            ),
            NexpError::MissingSymbolMaster { .. } => ErrorPayload::new(
                ErrorCategory::Document,
                self.to_string(),
                "Re-export the snapshot so every referenced symbol master is included.",
            ),
            NexpError::Asset(msg) => ErrorPayload::new(
                ErrorCategory::Asset,
                msg.to_string(),
                "Verify embedded image data and export-directory permissions.",
            ),
            NexpError::Config(msg) => ErrorPayload::new(
                ErrorCategory::Config,
                msg.to_string(),
                "Check flags/paths and the config file.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, NexpError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Document,
    Asset,
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
