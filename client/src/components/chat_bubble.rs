//! Floating toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Round button that opens and closes the chat window.
///
/// Shows a pulsing attention indicator only while the window is closed.
#[component]
pub fn ChatBubble(open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    let label = move || UiState { open: open.get() }.bubble_label();
    let icon_class = move || {
        if open.get() {
            "chat-bubble__icon chat-bubble__icon--close"
        } else {
            "chat-bubble__icon chat-bubble__icon--open"
        }
    };

    view! {
        <button
            class="chat-bubble"
            class:chat-bubble--open=move || open.get()
            aria-label=label
            on:click=move |_| on_toggle.run(())
        >
            <span class=icon_class aria-hidden="true"></span>
            <Show when=move || !open.get()>
                <span class="chat-bubble__pulse"></span>
                <span class="chat-bubble__dot"></span>
            </Show>
        </button>
    }
}
