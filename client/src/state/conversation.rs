//! Async send and lead flows tying [`ChatState`] to a [`ChatTransport`].
//!
//! DESIGN
//! ======
//! State is reached through [`ChatStore`], which yields `None` once the
//! owning widget is gone. A response that arrives after unmount is dropped
//! without effect.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use leptos::prelude::{RwSignal, Update};

use super::chat::ChatState;
use super::lead::{LeadDraft, ValidationError};
use crate::net::api::{ChatTransport, TransportError};

/// Access to the conversation state of one widget instance.
pub trait ChatStore {
    /// Run `f` against the state, or return `None` if it no longer exists.
    fn with_chat<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R>;
}

impl ChatStore for RwSignal<ChatState> {
    fn with_chat<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// How a send attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input or a send already in flight; nothing happened.
    Ignored,
    /// Backend replied; echo and reply are in the store.
    Delivered,
    /// Transport failed; the fallback reply is in the store.
    Failed(TransportError),
    /// The widget went away before the response arrived.
    Discarded,
}

/// Lead submission failure surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("There was an error submitting your information. Please try again.")]
    Transport(#[source] TransportError),
}

/// Send `input` as a user message and apply the backend's answer.
pub async fn send_message<S, T>(store: &S, transport: &T, input: &str) -> SendOutcome
where
    S: ChatStore,
    T: ChatTransport + ?Sized,
{
    let Some(Some(pending)) = store.with_chat(|c| c.begin_send(input)) else {
        return SendOutcome::Ignored;
    };

    let result = transport.send_message(&pending.request).await;
    if let Err(e) = &result {
        leptos::logging::error!("error sending message: {e}");
    }

    match store.with_chat(|c| c.finish_send(&pending, result)) {
        Some(Ok(())) => SendOutcome::Delivered,
        Some(Err(e)) => SendOutcome::Failed(e),
        None => SendOutcome::Discarded,
    }
}

/// Validate and submit a lead.
///
/// A disposed store on either side of the call ends the flow quietly.
///
/// # Errors
///
/// Returns [`LeadError::Validation`] without touching the network when
/// required fields are blank, and [`LeadError::Transport`] when the backend
/// call fails. The form stays open in both cases.
pub async fn submit_lead<S, T>(store: &S, transport: &T, draft: LeadDraft) -> Result<(), LeadError>
where
    S: ChatStore,
    T: ChatTransport + ?Sized,
{
    let Some(request) = store.with_chat(|c| c.lead_request(draft)) else {
        return Ok(());
    };
    let request = request?;

    transport.submit_lead(&request).await.map_err(|e| {
        leptos::logging::error!("error submitting lead: {e}");
        LeadError::Transport(e)
    })?;

    store.with_chat(ChatState::confirm_lead);
    Ok(())
}
