use crewdesk_core::{Desk, DeskConfig, DeskState};
use leptos::prelude::*;
use tracing::{info, warn};

use crate::api::GlooDeskApi;
use crate::components::chat::ChatPanel;
use crate::components::header::Header;
use crate::components::research::ResearchPanel;
use crate::surface::PageSurface;

pub const CONFIG_ELEMENT_ID: &str = "crewdesk-config";

pub type PageDesk = Desk<GlooDeskApi, PageSurface>;

/// Read the host page's JSON config block, falling back to defaults.
fn page_config() -> DeskConfig {
    let raw = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return DeskConfig::default();
    };

    match DeskConfig::from_json(&raw) {
        Ok(config) => {
            info!(api_base = %config.api_base, backend = %config.default_backend, "Loaded page config");
            config
        }
        Err(e) => {
            warn!("Ignoring page config: {}", e);
            DeskConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = page_config();
    let state = RwSignal::new(DeskState::new());
    let surface = PageSurface::new(state);
    let desk = StoredValue::new_local(Desk::new(
        GlooDeskApi::new(config.clone()),
        surface,
        config,
    ));

    // Fetch models on mount
    Effect::new(move || {
        let desk = desk.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            desk.load_models().await;
        });
    });

    view! {
        <div class="app">
            <Header />
            <main class="app-body">
                <ChatPanel
                    state=state
                    desk=desk
                    input_ref=surface.message_input
                    transcript_ref=surface.transcript
                />
                <ResearchPanel
                    state=state
                    desk=desk
                    input_ref=surface.topic_input
                    feed_ref=surface.research_feed
                />
            </main>
        </div>
    }
}
