use serde::{Deserialize, Serialize};

/// A model as advertised by `GET /api/models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
    #[serde(default)]
    pub backend: Option<String>,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>, backend: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backend: Some(backend.into()),
        }
    }

    pub fn is_backend(&self, backend: &str) -> bool {
        self.backend.as_deref() == Some(backend)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelListResponse {
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_models_field_is_empty() {
        let resp: ModelListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.models.is_empty());
    }

    #[test]
    fn test_descriptor_without_backend() {
        let resp: ModelListResponse =
            serde_json::from_str(r#"{"models": [{"name": "smollm2:135m"}]}"#).unwrap();
        assert_eq!(resp.models[0].name, "smollm2:135m");
        assert_eq!(resp.models[0].backend, None);
        assert!(!resp.models[0].is_backend("ollama"));
    }
}
