use serde::{Deserialize, Serialize};

use crate::{render, DeskConfig};

pub const UNKNOWN_BACKEND: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub topic: String,
    pub model: String,
    pub backend: String,
}

/// Body of a successful `POST /api/research`. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchResult {
    #[serde(default)]
    pub stdout_result: Option<String>,
    /// Older backends name the output `stdout`.
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub report_filename: Option<String>,
    #[serde(default)]
    pub report_content: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl ResearchResult {
    pub fn stdout(&self) -> Option<&str> {
        present(&self.stdout_result).or_else(|| present(&self.stdout))
    }

    pub fn report_filename(&self) -> Option<&str> {
        present(&self.report_filename)
    }

    pub fn report_content(&self) -> Option<&str> {
        present(&self.report_content)
    }

    pub fn error(&self) -> Option<&str> {
        present(&self.error)
    }

    /// An error with nothing else to show.
    pub fn is_fatal(&self) -> bool {
        self.error().is_some() && self.stdout().is_none() && self.report_content().is_none()
    }

    /// Backend that produced the report, recovered from a `backend:model` string.
    ///
    /// Heuristic: a bare model name containing a colon yields its first segment.
    pub fn report_backend(&self) -> &str {
        present(&self.model)
            .and_then(|m| m.split(':').next())
            .unwrap_or(UNKNOWN_BACKEND)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Running,
    Result,
    Failure,
}

/// A rendered item of the research pane. Results are kept only as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchEntry {
    pub kind: EntryKind,
    pub html: String,
}

impl ResearchEntry {
    pub fn running(topic: &str, model: &str) -> Self {
        Self {
            kind: EntryKind::Running,
            html: render::running_html(topic, model),
        }
    }

    pub fn result(result: &ResearchResult, config: &DeskConfig) -> Self {
        Self {
            kind: EntryKind::Result,
            html: render::research_result_html(result, config),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            kind: EntryKind::Failure,
            html: render::error_block_html(message),
        }
    }

    pub fn is_running(&self) -> bool {
        self.kind == EntryKind::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_model_prefix() {
        let result = ResearchResult {
            model: Some("ollama:llama3".into()),
            ..Default::default()
        };
        assert_eq!(result.report_backend(), "ollama");
    }

    #[test]
    fn test_backend_defaults_to_unknown() {
        assert_eq!(ResearchResult::default().report_backend(), "unknown");

        let empty = ResearchResult {
            model: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(empty.report_backend(), "unknown");
    }

    #[test]
    fn test_stdout_alias_accepted() {
        let result: ResearchResult = serde_json::from_str(r#"{"stdout": "done"}"#).unwrap();
        assert_eq!(result.stdout(), Some("done"));
    }

    #[test]
    fn test_both_stdout_fields_decode() {
        let result: ResearchResult = serde_json::from_str(
            r#"{"stdout": "old", "stdout_result": "new", "report_content": "r"}"#,
        )
        .unwrap();
        assert_eq!(result.stdout(), Some("new"));
        assert_eq!(result.report_content(), Some("r"));

        let empty_primary: ResearchResult =
            serde_json::from_str(r#"{"stdout": "old", "stdout_result": ""}"#).unwrap();
        assert_eq!(empty_primary.stdout(), Some("old"));
    }

    #[test]
    fn test_fatal_only_without_output() {
        let fatal = ResearchResult {
            error: Some("boom".into()),
            ..Default::default()
        };
        assert!(fatal.is_fatal());

        let warning = ResearchResult {
            error: Some("boom".into()),
            stdout_result: Some("partial".into()),
            ..Default::default()
        };
        assert!(!warning.is_fatal());
    }

    #[test]
    fn test_request_body_shape() {
        let req = ResearchRequest {
            topic: "rust".into(),
            model: "llama3".into(),
            backend: "ollama".into(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"topic": "rust", "model": "llama3", "backend": "ollama"})
        );
    }
}
