use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Backend route a request went to; names the request in fallback messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Models,
    Chat,
    Research,
}

impl Endpoint {
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Models => "Model list",
            Endpoint::Chat => "Chat",
            Endpoint::Research => "Research",
        }
    }
}

impl DeskError {
    /// Build an [`DeskError::Api`] from a non-success response.
    ///
    /// The message is the body's `detail` field when present, the raw JSON body
    /// when it parses but carries no `detail`, and a status line naming the
    /// endpoint when the body is not JSON at all.
    pub fn from_status(endpoint: Endpoint, status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => match value.get("detail") {
                Some(serde_json::Value::String(detail)) => detail.clone(),
                Some(serde_json::Value::Null) | None => value.to_string(),
                Some(detail) => detail.to_string(),
            },
            Err(_) => format!("{} request failed with status {}", endpoint.label(), status),
        };
        DeskError::Api { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            DeskError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_field_wins() {
        let err = DeskError::from_status(Endpoint::Research, 422, r#"{"detail": "topic too long"}"#);
        assert_eq!(err.to_string(), "topic too long");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_json_without_detail_is_shown_raw() {
        let err = DeskError::from_status(Endpoint::Research, 500, r#"{"error":"crew crashed"}"#);
        assert_eq!(err.to_string(), r#"{"error":"crew crashed"}"#);
    }

    #[test]
    fn test_structured_detail_is_serialized() {
        let err = DeskError::from_status(Endpoint::Research, 422, r#"{"detail":[{"msg":"field required"}]}"#);
        assert_eq!(err.to_string(), r#"[{"msg":"field required"}]"#);
    }

    #[test]
    fn test_unparseable_body_falls_back_to_status() {
        let err = DeskError::from_status(Endpoint::Research, 502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Research request failed with status 502");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_fallback_names_the_endpoint() {
        let models = DeskError::from_status(Endpoint::Models, 503, "<html>bad gateway</html>");
        assert_eq!(models.to_string(), "Model list request failed with status 503");

        let chat = DeskError::from_status(Endpoint::Chat, 500, "");
        assert_eq!(chat.to_string(), "Chat request failed with status 500");
        assert_eq!(chat.status(), Some(500));
    }

    #[test]
    fn test_transport_errors_have_no_status() {
        assert_eq!(DeskError::Http("connection refused".into()).status(), None);
    }
}
