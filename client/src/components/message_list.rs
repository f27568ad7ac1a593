//! Message rows and the typing indicator.

use leptos::prelude::*;

use crate::state::messages::{Message, Role};
use crate::util::time::local_time_label;

/// A single message row. User messages align right, assistant messages
/// left with an avatar.
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let is_user = message.role == Role::User;
    let sent_at = local_time_label(message.timestamp);

    view! {
        <div
            class="chat-message"
            class:chat-message--user=is_user
            class:chat-message--assistant=!is_user
            title=sent_at
        >
            {(!is_user).then(|| view! { <div class="chat-message__avatar" aria-hidden="true"></div> })}
            <p class="chat-message__content">{message.content}</p>
        </div>
    }
}

/// Three bouncing dots shown while a reply is pending.
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="chat-message chat-message--assistant chat-message--typing" aria-label="Assistant is typing">
            <div class="chat-message__avatar" aria-hidden="true"></div>
            <div class="chat-typing">
                <span class="chat-typing__dot"></span>
                <span class="chat-typing__dot"></span>
                <span class="chat-typing__dot"></span>
            </div>
        </div>
    }
}
