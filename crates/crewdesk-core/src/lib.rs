// Domain modules
pub mod chat;
pub mod config;
pub mod desk;
pub mod error;
pub mod model;
pub mod render;
pub mod research;
pub mod selector;

#[cfg(not(target_arch = "wasm32"))]
pub mod http;

pub use chat::{ChatMessage, ChatRequest, ChatResponse, Role, CHAT_ERROR};
pub use config::{DeskConfig, DEFAULT_BACKEND};
pub use desk::{Action, Desk, DeskApi, DeskState, Field, Pane, Surface};
pub use error::{DeskError, Endpoint, Result};
pub use model::{ModelDescriptor, ModelListResponse};
pub use research::{EntryKind, ResearchEntry, ResearchRequest, ResearchResult};
pub use selector::{ModelSelect, SelectOption};

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpDeskApi;
