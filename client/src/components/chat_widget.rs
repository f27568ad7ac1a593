//! Widget root: owns conversation state and toggles the window.

use leptos::prelude::*;

use super::chat_bubble::ChatBubble;
use super::chat_window::ChatWindow;
use crate::config::WidgetConfig;
use crate::net::api::SharedTransport;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;

/// Floating chat widget.
///
/// Conversation state is scoped to this component, so closing the window
/// keeps the history while unmounting the widget discards it. Pass
/// `transport` to override the HTTP transport built from the detected
/// [`WidgetConfig`].
#[component]
pub fn ChatWidget(#[prop(optional)] transport: Option<SharedTransport>) -> impl IntoView {
    let transport = transport.unwrap_or_else(|| SharedTransport::http(WidgetConfig::detect()));

    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(chat);
    provide_context(ui);
    provide_context(transport);

    let toggle = Callback::new(move |()| ui.update(UiState::toggle));
    let open = Signal::derive(move || ui.get().open);

    view! {
        <div class="chat-widget">
            <Show when=move || open.get()>
                <ChatWindow on_close=toggle/>
            </Show>
            <ChatBubble open=open on_toggle=toggle/>
        </div>
    }
}
