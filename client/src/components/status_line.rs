//! Single-line status text with a tone class.

use leptos::prelude::*;

use crate::state::status::StatusMessage;

/// Renders nothing while the message is empty.
#[component]
pub fn StatusLine(#[prop(into)] status: Signal<StatusMessage>) -> impl IntoView {
    view! {
        <Show when=move || !status.get().is_empty()>
            <p class=move || format!("status-line {}", status.get().tone.css_class())>
                {move || status.get().text}
            </p>
        </Show>
    }
}
