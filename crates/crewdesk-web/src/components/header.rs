use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"CrewDesk"</h1>
            <span class="subtitle">"Local chat and research agents"</span>
        </header>
    }
}
