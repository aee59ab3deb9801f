use serde::{Deserialize, Serialize};

use crate::{DeskError, Result};

pub const DEFAULT_BACKEND: &str = "ollama";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Prefix for every API route; empty means same origin.
    #[serde(default)]
    pub api_base: String,
    /// The only backend whose models are offered for chat.
    #[serde(default = "default_backend")]
    pub default_backend: String,
    /// Escape assistant and user chat bubbles instead of rendering them as markup.
    #[serde(default)]
    pub escape_chat: bool,
}

fn default_backend() -> String {
    DEFAULT_BACKEND.to_string()
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            default_backend: default_backend(),
            escape_chat: false,
        }
    }
}

impl DeskConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| DeskError::Config(e.to_string()))?;
        if config.default_backend.trim().is_empty() {
            return Err(DeskError::Config("default_backend must not be empty".into()));
        }
        Ok(config)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    pub fn models_url(&self) -> String {
        self.endpoint("/api/models")
    }

    pub fn chat_url(&self) -> String {
        self.endpoint("/api/chat")
    }

    pub fn research_url(&self) -> String {
        self.endpoint("/api/research")
    }

    pub fn report_url(&self, backend: &str, filename: &str) -> String {
        self.endpoint(&format!(
            "/api/research/report/{}/{}",
            urlencoding::encode(backend),
            urlencoding::encode(filename)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_same_origin() {
        let config = DeskConfig::default();
        assert_eq!(config.models_url(), "/api/models");
        assert_eq!(config.chat_url(), "/api/chat");
        assert_eq!(config.research_url(), "/api/research");
        assert_eq!(config.default_backend, "ollama");
        assert!(!config.escape_chat);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = DeskConfig::from_json(r#"{"api_base": "http://localhost:8000/"}"#).unwrap();
        assert_eq!(
            config,
            DeskConfig {
                api_base: "http://localhost:8000/".into(),
                ..DeskConfig::default()
            }
        );
        assert_eq!(config.chat_url(), "http://localhost:8000/api/chat");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = DeskConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, DeskError::Config(_)));
    }

    #[test]
    fn test_blank_default_backend_rejected() {
        let err = DeskConfig::from_json(r#"{"default_backend": "  "}"#).unwrap_err();
        assert!(err.to_string().contains("default_backend"));
    }

    #[test]
    fn test_report_url_encodes_segments() {
        let config = DeskConfig::default();
        assert_eq!(
            config.report_url("ollama", "my report #1.md"),
            "/api/research/report/ollama/my%20report%20%231.md"
        );
    }
}
