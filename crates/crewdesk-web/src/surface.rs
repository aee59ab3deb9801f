use crewdesk_core::{DeskState, Field, Pane, Surface};
use leptos::html::{Div, Input};
use leptos::prelude::*;
use tracing::warn;

/// Page-backed [`Surface`]: state lives in a signal, imperative effects go
/// through node refs once the next frame has rendered.
#[derive(Clone, Copy)]
pub struct PageSurface {
    pub state: RwSignal<DeskState>,
    pub message_input: NodeRef<Input>,
    pub topic_input: NodeRef<Input>,
    pub transcript: NodeRef<Div>,
    pub research_feed: NodeRef<Div>,
}

impl PageSurface {
    pub fn new(state: RwSignal<DeskState>) -> Self {
        Self {
            state,
            message_input: NodeRef::new(),
            topic_input: NodeRef::new(),
            transcript: NodeRef::new(),
            research_feed: NodeRef::new(),
        }
    }
}

impl Surface for PageSurface {
    fn update(&self, f: impl FnOnce(&mut DeskState)) {
        self.state.update(f);
    }

    fn read<R>(&self, f: impl FnOnce(&DeskState) -> R) -> R {
        self.state.with_untracked(f)
    }

    fn alert(&self, message: &str) {
        if let Err(e) = window().alert_with_message(message) {
            warn!("alert failed: {:?}", e);
        }
    }

    fn focus(&self, field: Field) {
        let node = match field {
            Field::MessageInput => self.message_input,
            Field::TopicInput => self.topic_input,
        };
        // The input is still disabled until the busy flag change renders.
        request_animation_frame(move || {
            let Some(input) = node.get_untracked() else { return };
            if let Err(e) = input.focus() {
                warn!("focus failed: {:?}", e);
            }
        });
    }

    fn scroll_to_end(&self, pane: Pane) {
        let node = match pane {
            Pane::Transcript => self.transcript,
            Pane::ResearchFeed => self.research_feed,
        };
        request_animation_frame(move || {
            let Some(el) = node.get_untracked() else { return };
            el.set_scroll_top(el.scroll_height());
        });
    }
}
