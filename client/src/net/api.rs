//! HTTP transport for the chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: calls fail with
//! [`TransportError::Unavailable`] since the endpoints are only reached from
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into a [`TransportError`]. Callers decide how to
//! recover: the send flow substitutes a fallback message, the lead flow
//! surfaces a notice.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use super::types::{LeadRequest, SendMessageRequest, SendMessageResponse};
use crate::config::WidgetConfig;

/// Failure of an outbound backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend returned status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// No HTTP stack in this build (SSR or native).
    #[error("transport not available outside the browser")]
    Unavailable,
}

/// The two backend calls the widget makes. Enables mocking in tests.
///
/// Futures are not `Send`: the browser runs them on the single UI thread.
#[async_trait::async_trait(?Send)]
pub trait ChatTransport: Send + Sync {
    /// Post a user message and return the backend's echo plus reply.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on network, status, or decode failure.
    async fn send_message(&self, request: &SendMessageRequest) -> Result<SendMessageResponse, TransportError>;

    /// Post a lead. Only success or failure matters.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on network or status failure.
    async fn submit_lead(&self, request: &LeadRequest) -> Result<(), TransportError>;
}

/// Shared handle to the active transport, provided via context.
#[derive(Clone)]
pub struct SharedTransport(pub Arc<dyn ChatTransport>);

impl SharedTransport {
    #[must_use]
    pub fn http(config: WidgetConfig) -> Self {
        Self(Arc::new(HttpTransport::new(config)))
    }
}

/// Transport that talks to the configured backend over HTTP.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    config: WidgetConfig,
}

impl HttpTransport {
    #[must_use]
    pub fn new(config: WidgetConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }
}

#[async_trait::async_trait(?Send)]
impl ChatTransport for HttpTransport {
    async fn send_message(&self, request: &SendMessageRequest) -> Result<SendMessageResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = post_json(&self.config.message_endpoint(), request).await?;
            resp.json::<SendMessageResponse>()
                .await
                .map_err(|e| TransportError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }

    async fn submit_lead(&self, request: &LeadRequest) -> Result<(), TransportError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.config.lead_endpoint(), request).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_json(url: &str, body: &impl serde::Serialize) -> Result<gloo_net::http::Response, TransportError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| TransportError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| TransportError::Request(e.to_string()))?;
    check_status(resp.status())?;
    Ok(resp)
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), TransportError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(TransportError::Status(status))
    }
}
