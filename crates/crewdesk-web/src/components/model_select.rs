use crewdesk_core::{Action, DeskState};
use leptos::prelude::*;
use web_sys::HtmlSelectElement;

/// Model dropdown bound to the selector that feeds `action`.
#[component]
pub fn ModelSelectBox(state: RwSignal<DeskState>, action: Action) -> impl IntoView {
    let busy = Memo::new(move |_| state.with(|s| s.is_busy(action)));
    let select = Memo::new(move |_| state.with(|s| s.models(action).clone()));

    let on_change = move |ev: web_sys::Event| {
        let index = event_target::<HtmlSelectElement>(&ev).selected_index();
        state.update(|s| s.models_mut(action).select_index(index));
    };

    view! {
        <select
            class="model-select"
            disabled=move || busy.get()
            on:change=on_change
        >
            {move || select.with(|select| {
                select.options.iter().enumerate().map(|(i, opt)| {
                    view! {
                        <option
                            value=opt.value.clone()
                            disabled=opt.disabled
                            prop:selected=select.is_selected(i)
                            data-backend=opt.backend.clone()
                        >
                            {opt.label.clone()}
                        </option>
                    }
                }).collect::<Vec<_>>()
            })}
        </select>
    }
}
