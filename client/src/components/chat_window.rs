//! Chat window: message history, input row, and lead form slot.

use leptos::prelude::*;

use super::lead_form::LeadForm;
use super::message_list::{MessageBubble, TypingIndicator};
use crate::net::api::SharedTransport;
use crate::state::chat::ChatState;
use crate::state::conversation::send_message;
use crate::util::keys::{Modifiers, is_submit_key};

#[cfg(feature = "hydrate")]
const FOCUS_DELAY_MS: u32 = 200;

/// Chat window rendered while the widget is open.
///
/// Seeds the welcome message on first open, scrolls to the newest message
/// on every change, and sends on the button or plain Enter.
#[component]
pub fn ChatWindow(on_close: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let transport = StoredValue::new(expect_context::<SharedTransport>());

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    chat.update(|c| {
        c.seed_welcome();
    });

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(FOCUS_DELAY_MS).await;
            if let Some(el) = input_ref.try_get_untracked().flatten() {
                let _ = el.focus();
            }
        });
    }

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.is_sending()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() || chat.with_untracked(ChatState::is_sending) {
            return;
        }
        input.set(String::new());

        let transport = transport.get_value();
        leptos::task::spawn_local(async move {
            let _ = send_message(&chat, transport.0.as_ref(), &text).await;
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), Modifiers::from_event(&ev)) {
            ev.prevent_default();
            do_send();
        }
    };

    let sending = move || chat.with(ChatState::is_sending);
    let lead_form_open = move || chat.with(|c| c.lead_form_open);
    let can_send = move || !input.with(|t| t.trim().is_empty()) && !sending();
    let open_lead_form = move |_| chat.update(|c| c.set_lead_form_open(true));

    view! {
        <div class="chat-backdrop" on:click=move |_| on_close.run(())></div>

        <div class="chat-window" role="dialog" aria-label="Chat">
            <header class="chat-window__header">
                <div class="chat-window__identity">
                    <div class="chat-window__avatar" aria-hidden="true"></div>
                    <div>
                        <h3 class="chat-window__title">"Pinnacle Sync Assistant"</h3>
                        <p class="chat-window__subtitle">"We're here to help"</p>
                    </div>
                </div>
                <button
                    class="chat-window__close"
                    aria-label="Close chat"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
            </header>

            <div class="chat-window__messages" node_ref=messages_ref>
                {move || {
                    chat.with(|c| {
                        c.messages
                            .as_slice()
                            .iter()
                            .cloned()
                            .map(|message| view! { <MessageBubble message/> })
                            .collect::<Vec<_>>()
                    })
                }}
                <Show when=sending>
                    <TypingIndicator/>
                </Show>
            </div>

            <Show when=lead_form_open>
                <LeadForm/>
            </Show>

            <footer class="chat-window__footer">
                <Show when=move || !lead_form_open()>
                    <button class="chat-window__callback" on:click=open_lead_form>
                        "Get a callback from our team"
                    </button>
                </Show>

                <div class="chat-window__input-row">
                    <input
                        class="chat-window__input"
                        type="text"
                        placeholder="Type your message..."
                        node_ref=input_ref
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        disabled=sending
                    />
                    <button
                        class="btn btn--primary chat-window__send"
                        aria-label="Send message"
                        on:click=on_click
                        disabled=move || !can_send()
                    >
                        "Send"
                    </button>
                </div>
                <p class="chat-window__hint">"Press Enter to send"</p>
            </footer>
        </div>
    }
}
