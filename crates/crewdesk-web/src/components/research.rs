use crewdesk_core::{Action, DeskState, EntryKind};
use leptos::html::{Div, Input};
use leptos::prelude::*;

use super::model_select::ModelSelectBox;
use crate::app::PageDesk;

fn entry_class(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Running => "research-result running",
        EntryKind::Result => "research-result",
        EntryKind::Failure => "research-result failed",
    }
}

#[component]
pub fn ResearchPanel(
    state: RwSignal<DeskState>,
    desk: StoredValue<PageDesk, LocalStorage>,
    input_ref: NodeRef<Input>,
    feed_ref: NodeRef<Div>,
) -> impl IntoView {
    let busy = Memo::new(move |_| state.with(|s| s.research_busy));
    let feed = Memo::new(move |_| state.with(|s| s.research_feed.clone()));
    let input = Memo::new(move |_| state.with(|s| s.topic_input.clone()));

    let start = move || {
        let desk = desk.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            desk.start_research().await;
        });
    };

    view! {
        <section class="panel research-panel">
            <h2>"Research"</h2>
            <ModelSelectBox state=state action=Action::Research />

            <div class="input-row">
                <input
                    type="text"
                    placeholder="Enter a research topic..."
                    node_ref=input_ref
                    disabled=move || busy.get()
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.topic_input = value);
                    }
                    on:keypress=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            start();
                        }
                    }
                />
                <button class="run-btn" disabled=move || busy.get() on:click=move |_| start()>
                    {move || if busy.get() {
                        view! { <span class="loading"><span class="spinner"></span>" Researching..."</span> }.into_any()
                    } else {
                        view! { <span>"Start Research"</span> }.into_any()
                    }}
                </button>
            </div>

            <div class="research-container" node_ref=feed_ref>
                {move || feed.with(|entries| {
                    entries.iter().map(|entry| {
                        view! { <div class=entry_class(entry.kind) inner_html=entry.html.clone()></div> }
                    }).collect::<Vec<_>>()
                })}
            </div>
        </section>
    }
}
