//! Model selector state - options shown in a `<select>` and the current pick

use crate::ModelDescriptor;

pub const LOADING_MODELS: &str = "Loading models...";
pub const NO_MODELS: &str = "No models available";
pub const MODELS_ERROR: &str = "Error loading models";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    /// Backend that owns the model; research requests are routed with it.
    pub backend: Option<String>,
    pub disabled: bool,
}

impl SelectOption {
    pub fn placeholder(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            backend: None,
            disabled: true,
        }
    }

    pub fn chat(model: &ModelDescriptor) -> Self {
        Self {
            label: model.name.clone(),
            value: model.name.clone(),
            backend: model.backend.clone(),
            disabled: false,
        }
    }

    pub fn research(model: &ModelDescriptor) -> Self {
        let backend = model.backend.as_deref().unwrap_or("unknown");
        Self {
            label: format!("{} ({})", model.name, backend),
            value: model.name.clone(),
            backend: model.backend.clone(),
            disabled: false,
        }
    }
}

/// Options of one selector plus the index of the chosen one.
///
/// Selection is by index: the research list may hold the same model name under
/// two backends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelSelect {
    pub options: Vec<SelectOption>,
    pub selected: Option<usize>,
}

impl ModelSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        let mut select = Self::new();
        select.show_placeholder(LOADING_MODELS);
        select
    }

    /// Replace all options with a single disabled entry.
    pub fn show_placeholder(&mut self, label: &str) {
        self.options = vec![SelectOption::placeholder(label)];
        self.selected = None;
    }

    /// Replace all options; the first enabled one becomes the selection.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.selected = options.iter().position(|o| !o.disabled);
        self.options = options;
    }

    pub fn populate_chat(&mut self, models: &[ModelDescriptor], backend: &str) {
        let options = models
            .iter()
            .filter(|m| m.is_backend(backend))
            .map(SelectOption::chat)
            .collect();
        self.set_options(options);
    }

    pub fn populate_research(&mut self, models: &[ModelDescriptor]) {
        self.set_options(models.iter().map(SelectOption::research).collect());
    }

    /// Select by DOM `selectedIndex`; disabled or out-of-range picks clear the selection.
    pub fn select_index(&mut self, index: i32) {
        self.selected = usize::try_from(index)
            .ok()
            .filter(|&i| self.options.get(i).is_some_and(|o| !o.disabled));
    }

    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.selected
            .and_then(|i| self.options.get(i))
            .filter(|o| !o.disabled)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn has_models(&self) -> bool {
        self.options.iter().any(|o| !o.disabled)
    }
}
