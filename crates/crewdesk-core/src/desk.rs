//! The page controller: model loading, chat and research submission.
//!
//! `Desk` owns no page state itself. It reads and mutates [`DeskState`] through a
//! [`Surface`] and talks to the backend through a [`DeskApi`], so the browser
//! build and the tests plug in their own implementations.

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::selector::{MODELS_ERROR, NO_MODELS};
use crate::{
    render, ChatMessage, ChatRequest, ChatResponse, DeskConfig, ModelDescriptor, ModelSelect,
    ResearchEntry, ResearchRequest, ResearchResult, Result, CHAT_ERROR,
};

pub const ENTER_TOPIC: &str = "Please enter a research topic.";
pub const SELECT_MODEL: &str = "Please select a model first.";
pub const MISSING_BACKEND: &str =
    "The selected model has no backend information. Reload the page to refresh the model list.";

#[async_trait(?Send)]
pub trait DeskApi {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>>;
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse>;
    async fn research(&self, request: &ResearchRequest) -> Result<ResearchResult>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MessageInput,
    TopicInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Transcript,
    ResearchFeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Chat,
    Research,
}

impl Action {
    fn field(self) -> Field {
        match self {
            Action::Chat => Field::MessageInput,
            Action::Research => Field::TopicInput,
        }
    }
}

/// Everything the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskState {
    pub chat_models: ModelSelect,
    pub research_models: ModelSelect,
    pub chat_input: String,
    pub topic_input: String,
    /// A chat request is in flight; input and send button are disabled.
    pub chat_busy: bool,
    /// A research request is in flight; topic input and button are disabled.
    pub research_busy: bool,
    pub transcript: Vec<ChatMessage>,
    pub research_feed: Vec<ResearchEntry>,
}

impl Default for DeskState {
    fn default() -> Self {
        Self {
            chat_models: ModelSelect::loading(),
            research_models: ModelSelect::loading(),
            chat_input: String::new(),
            topic_input: String::new(),
            chat_busy: false,
            research_busy: false,
            transcript: Vec::new(),
            research_feed: Vec::new(),
        }
    }
}

impl DeskState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selector feeding `action`.
    pub fn models(&self, action: Action) -> &ModelSelect {
        match action {
            Action::Chat => &self.chat_models,
            Action::Research => &self.research_models,
        }
    }

    pub fn models_mut(&mut self, action: Action) -> &mut ModelSelect {
        match action {
            Action::Chat => &mut self.chat_models,
            Action::Research => &mut self.research_models,
        }
    }

    pub fn is_busy(&self, action: Action) -> bool {
        match action {
            Action::Chat => self.chat_busy,
            Action::Research => self.research_busy,
        }
    }

    fn busy_mut(&mut self, action: Action) -> &mut bool {
        match action {
            Action::Chat => &mut self.chat_busy,
            Action::Research => &mut self.research_busy,
        }
    }
}

/// Where the controller's effects land: page state plus the few imperative
/// operations a page has (alert, focus, scroll).
pub trait Surface {
    fn update(&self, f: impl FnOnce(&mut DeskState));
    fn read<R>(&self, f: impl FnOnce(&DeskState) -> R) -> R;
    fn alert(&self, message: &str);
    fn focus(&self, field: Field);
    fn scroll_to_end(&self, pane: Pane);
}

/// Holds an action's busy flag; dropping it re-enables the controls and
/// refocuses the action's input.
struct BusyGuard<'a, S: Surface> {
    surface: &'a S,
    action: Action,
}

impl<'a, S: Surface> BusyGuard<'a, S> {
    fn acquire(surface: &'a S, action: Action) -> Option<Self> {
        let mut acquired = false;
        surface.update(|state| {
            let busy = state.busy_mut(action);
            if !*busy {
                *busy = true;
                acquired = true;
            }
        });
        acquired.then(|| Self { surface, action })
    }
}

impl<S: Surface> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        let action = self.action;
        self.surface.update(|state| *state.busy_mut(action) = false);
        self.surface.focus(action.field());
    }
}

#[derive(Debug, Clone)]
pub struct Desk<A, S> {
    api: A,
    surface: S,
    config: DeskConfig,
}

impl<A: DeskApi, S: Surface> Desk<A, S> {
    pub fn new(api: A, surface: S, config: DeskConfig) -> Self {
        Self {
            api,
            surface,
            config,
        }
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Transcript bubble markup, escaped when the page config asks for it.
    pub fn chat_bubble_html(&self, message: &ChatMessage) -> String {
        render::chat_bubble_html(message, self.config.escape_chat)
    }

    /// Fetch the model list and rebuild both selectors. Never fails: errors
    /// end up as a disabled placeholder entry.
    pub async fn load_models(&self) {
        let models = match self.api.list_models().await {
            Ok(models) => models,
            Err(e) => {
                error!(status = ?e.status(), "Failed to load models: {}", e);
                self.show_model_placeholder(MODELS_ERROR);
                return;
            }
        };

        if models.is_empty() {
            warn!("Backend returned no models");
            self.show_model_placeholder(NO_MODELS);
            return;
        }

        info!(count = models.len(), "Loaded models");
        let backend = self.config.default_backend.as_str();
        self.surface.update(|state| {
            state.chat_models.populate_chat(&models, backend);
            state.research_models.populate_research(&models);
        });
    }

    fn show_model_placeholder(&self, label: &str) {
        self.surface.update(|state| {
            state.chat_models.show_placeholder(label);
            state.research_models.show_placeholder(label);
        });
    }

    pub async fn send_message(&self) {
        let message = self.surface.read(|s| s.chat_input.trim().to_string());
        if message.is_empty() {
            return;
        }

        let model = self
            .surface
            .read(|s| s.chat_models.selected_option().map(|o| o.value.clone()));
        let Some(model) = model else {
            warn!("Chat submitted without a model");
            self.surface.alert(SELECT_MODEL);
            return;
        };

        let Some(_busy) = BusyGuard::acquire(&self.surface, Action::Chat) else {
            debug!("Chat request already in flight");
            return;
        };

        self.surface.update(|state| {
            state.transcript.push(ChatMessage::user(message.as_str()));
            state.chat_input.clear();
        });
        self.surface.scroll_to_end(Pane::Transcript);

        info!(model = %model, "Sending chat message");
        let request = ChatRequest::new(message, model);
        let reply = match self.api.chat(&request).await {
            Ok(resp) => ChatMessage::assistant(resp.response),
            Err(e) => {
                error!(status = ?e.status(), "Chat request failed: {}", e);
                ChatMessage::assistant(CHAT_ERROR)
            }
        };

        self.surface.update(|state| state.transcript.push(reply));
        self.surface.scroll_to_end(Pane::Transcript);
    }

    pub async fn start_research(&self) {
        let topic = self.surface.read(|s| s.topic_input.trim().to_string());
        if topic.is_empty() {
            self.surface.alert(ENTER_TOPIC);
            self.surface.focus(Field::TopicInput);
            return;
        }

        let selection = self
            .surface
            .read(|s| s.research_models.selected_option().cloned());
        let Some(option) = selection else {
            warn!("Research submitted without a model");
            self.surface.alert(SELECT_MODEL);
            return;
        };
        let Some(backend) = option.backend else {
            warn!(model = %option.value, "Selected research model has no backend");
            self.surface.alert(MISSING_BACKEND);
            return;
        };

        let Some(_busy) = BusyGuard::acquire(&self.surface, Action::Research) else {
            debug!("Research request already in flight");
            return;
        };

        let running = ResearchEntry::running(&topic, &option.value);
        self.surface.update(|state| state.research_feed = vec![running]);

        info!(model = %option.value, backend = %backend, "Starting research");
        let request = ResearchRequest {
            topic,
            model: option.value,
            backend,
        };

        match self.api.research(&request).await {
            Ok(result) => {
                if let Some(e) = result.error() {
                    warn!("Research finished with error: {}", e);
                }
                let entry = ResearchEntry::result(&result, &self.config);
                self.surface.update(|state| {
                    state.research_feed.retain(|e| !e.is_running());
                    state.research_feed.push(entry);
                });
                self.surface.scroll_to_end(Pane::ResearchFeed);
            }
            Err(e) => {
                error!(status = ?e.status(), "Research request failed: {}", e);
                let failure = ResearchEntry::failure(&e.to_string());
                self.surface.update(|state| state.research_feed = vec![failure]);
            }
        }
    }
}
