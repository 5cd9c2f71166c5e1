use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DexError {
    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            DexError::Io(e) => ErrorPayload::new(
                ErrorCategory::Io,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            DexError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "The input must be a JSON object (a document export or node map).",
            ),
            DexError::Config(msg) => ErrorPayload::new(
                ErrorCategory::Config,
                msg.to_string(),
                "Check the config file path and threshold values (see --help).",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, DexError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Io,
    Input,
    Config,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_errors_map_to_input_category() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let payload = DexError::from(err).to_payload();
        assert_eq!(payload.category, ErrorCategory::Input);
        assert!(payload.remediation.is_some());
    }

    #[test]
    fn config_errors_carry_their_message() {
        let err = DexError::Config("spacing-threshold must be positive".to_string());
        assert!(err.to_string().contains("spacing-threshold"));
        assert_eq!(err.to_payload().category, ErrorCategory::Config);
    }

    #[test]
    fn payload_serializes_with_camel_case_category() {
        let payload = ErrorPayload::new(ErrorCategory::Io, "boom".to_string(), "retry");
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(json["category"], "io");
        assert_eq!(json["remediation"], "retry");
    }
}
