use crewdesk_core::{Action, DeskState};
use leptos::html::{Div, Input};
use leptos::prelude::*;

use super::model_select::ModelSelectBox;
use crate::app::PageDesk;

#[component]
pub fn ChatPanel(
    state: RwSignal<DeskState>,
    desk: StoredValue<PageDesk, LocalStorage>,
    input_ref: NodeRef<Input>,
    transcript_ref: NodeRef<Div>,
) -> impl IntoView {
    let busy = Memo::new(move |_| state.with(|s| s.chat_busy));
    let transcript = Memo::new(move |_| state.with(|s| s.transcript.clone()));
    let input = Memo::new(move |_| state.with(|s| s.chat_input.clone()));

    let send = move || {
        let desk = desk.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            desk.send_message().await;
        });
    };

    view! {
        <section class="panel chat-panel">
            <h2>"Chat"</h2>
            <ModelSelectBox state=state action=Action::Chat />

            <div class="chat-container" node_ref=transcript_ref>
                {move || transcript.with(|messages| {
                    messages.iter().map(|m| {
                        let class = format!("message {}", m.role.css_class());
                        let html = desk.with_value(|d| d.chat_bubble_html(m));
                        view! { <div class=class inner_html=html></div> }
                    }).collect::<Vec<_>>()
                })}
            </div>

            <div class="input-row">
                <input
                    type="text"
                    placeholder="Type your message..."
                    node_ref=input_ref
                    disabled=move || busy.get()
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.chat_input = value);
                    }
                    on:keypress=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            send();
                        }
                    }
                />
                <button class="send-btn" disabled=move || busy.get() on:click=move |_| send()>
                    "Send"
                </button>
            </div>
        </section>
    }
}
