//! Conversation state for one mounted widget.
//!
//! DESIGN
//! ======
//! Sending is split into two synchronous steps around the network call:
//! `begin_send` appends the optimistic user message and raises the busy
//! flag, `finish_send` reconciles the backend response (or appends the
//! fallback) and lowers it. Keeping both steps synchronous means state is
//! never borrowed across an await.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::lead::{LeadDraft, ValidationError};
use super::messages::{Message, MessageStore};
use super::session::SessionCell;
use crate::net::api::TransportError;
use crate::net::types::{LeadRequest, SendMessageRequest, SendMessageResponse};

pub const WELCOME_TEXT: &str = "Hello! Welcome to Pinnacle Sync. I'm here to assist you with our IT recruiting services and software solutions. How may I help you today?";
pub const FALLBACK_TEXT: &str =
    "I apologize, but I'm having trouble connecting right now. Please try again in a moment.";
pub const LEAD_CONFIRMATION_TEXT: &str =
    "Thank you! A member of our team will reach out to you shortly. Is there anything else I can help you with?";

/// Conversation state: messages, session, busy flag, lead form visibility.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: MessageStore,
    pub session: SessionCell,
    sending: bool,
    pub lead_form_open: bool,
}

/// A send that has been started and awaits the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    pub provisional_id: String,
    pub request: SendMessageRequest,
}

impl ChatState {
    /// Whether a send is in flight.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Seed the welcome message into an empty conversation.
    ///
    /// Returns `true` when the message was added.
    pub fn seed_welcome(&mut self) -> bool {
        if !self.messages.is_empty() {
            return false;
        }
        self.messages.push(Message::welcome());
        true
    }

    /// Start a send.
    ///
    /// Returns `None` without touching state when `input` is blank or a send
    /// is already in flight.
    pub fn begin_send(&mut self, input: &str) -> Option<PendingSend> {
        let text = input.trim();
        if text.is_empty() || self.sending {
            return None;
        }

        let provisional = Message::provisional_user(text);
        let pending = PendingSend {
            provisional_id: provisional.id.clone(),
            request: SendMessageRequest {
                session_id: self.session.get().map(str::to_owned),
                message: text.to_owned(),
            },
        };
        self.messages.push(provisional);
        self.sending = true;
        Some(pending)
    }

    /// Apply the outcome of a send started with [`ChatState::begin_send`].
    ///
    /// On success the optimistic message is replaced in place by the
    /// backend's copy and the reply is appended. On failure the optimistic
    /// message stays and the fallback reply is appended.
    ///
    /// # Errors
    ///
    /// Hands back the transport error after the fallback has been appended.
    pub fn finish_send(
        &mut self,
        pending: &PendingSend,
        result: Result<SendMessageResponse, TransportError>,
    ) -> Result<(), TransportError> {
        self.sending = false;
        match result {
            Ok(resp) => {
                self.session.set(&resp.session_id);
                if let Err(user) = self.messages.replace(&pending.provisional_id, resp.user_message.into()) {
                    self.messages.push(user);
                }
                self.messages.push(resp.assistant_message.into());
                Ok(())
            }
            Err(e) => {
                self.messages.push(Message::fallback());
                Err(e)
            }
        }
    }

    /// Validate a lead draft against the current session.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when required fields are blank.
    pub fn lead_request(&self, draft: LeadDraft) -> Result<LeadRequest, ValidationError> {
        draft.into_request(self.session.get())
    }

    /// Record an accepted lead: confirmation message, form closed.
    pub fn confirm_lead(&mut self) {
        self.messages.push(Message::lead_confirmation());
        self.lead_form_open = false;
    }

    pub fn set_lead_form_open(&mut self, open: bool) {
        self.lead_form_open = open;
    }
}
