//! Conversation message store.
//!
//! DESIGN
//! ======
//! The store is append-only. Optimistic entries are reconciled by replacing
//! them in place, so a confirmed message keeps the position its placeholder
//! had and the rendered list never reorders.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use chrono::{DateTime, Utc};

/// Id of the greeting seeded when the window first opens.
pub const WELCOME_ID: &str = "welcome";

const TEMP_PREFIX: &str = "temp-";
const ERROR_PREFIX: &str = "error-";
const LEAD_PREFIX: &str = "lead-";

/// Author of a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Assistant,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Optimistic user message shown before the backend confirms it.
    #[must_use]
    pub fn provisional_user(content: &str) -> Self {
        Self {
            id: local_id(TEMP_PREFIX),
            role: Role::User,
            content: content.to_owned(),
            timestamp: Utc::now(),
        }
    }

    /// Assistant message synthesized on the client.
    #[must_use]
    pub fn local_assistant(id: String, content: &str) -> Self {
        Self { id, role: Role::Assistant, content: content.to_owned(), timestamp: Utc::now() }
    }

    /// Fixed greeting shown on first open.
    #[must_use]
    pub fn welcome() -> Self {
        Self::local_assistant(WELCOME_ID.to_owned(), crate::state::chat::WELCOME_TEXT)
    }

    /// Apology shown when a send fails.
    #[must_use]
    pub fn fallback() -> Self {
        Self::local_assistant(local_id(ERROR_PREFIX), crate::state::chat::FALLBACK_TEXT)
    }

    /// Confirmation shown after a lead is accepted.
    #[must_use]
    pub fn lead_confirmation() -> Self {
        Self::local_assistant(local_id(LEAD_PREFIX), crate::state::chat::LEAD_CONFIRMATION_TEXT)
    }

    /// Whether this is an unconfirmed optimistic entry.
    #[must_use]
    pub fn is_provisional(&self) -> bool {
        self.id.starts_with(TEMP_PREFIX)
    }
}

fn local_id(prefix: &str) -> String {
    format!("{prefix}{}", uuid::Uuid::new_v4())
}

/// Ordered, append-only message list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    /// Append one message at the end.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append several messages, preserving their order.
    pub fn extend(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.messages.extend(messages);
    }

    /// Replace the message with id `id` in place.
    ///
    /// # Errors
    ///
    /// Hands `message` back untouched when no message has that id.
    pub fn replace(&mut self, id: &str, message: Message) -> Result<(), Message> {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(slot) => {
                *slot = message;
                Ok(())
            }
            None => Err(message),
        }
    }

    /// All messages in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
