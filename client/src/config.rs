//! Widget configuration.
//!
//! The widget has exactly one setting: the chat backend base URL. On the
//! server it comes from the process environment. The host renders it into
//! the page as `<meta name="chat-backend-url">`, and the hydrated widget
//! reads it back from there, since a WASM bundle has no process environment
//! of its own.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable naming the chat backend base URL.
pub const BACKEND_URL_VAR: &str = "CHAT_BACKEND_URL";

/// `name` of the `<meta>` tag carrying the backend URL into the browser.
pub const BACKEND_URL_META: &str = "chat-backend-url";

const MESSAGE_PATH: &str = "/api/chat/message";
const LEAD_PATH: &str = "/api/chat/lead";

/// Resolved widget configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Backend base URL without a trailing slash. Empty means same origin.
    pub backend_url: String,
}

impl WidgetConfig {
    /// Resolve configuration from `CHAT_BACKEND_URL`.
    ///
    /// The runtime value wins over the value baked in at build time.
    #[must_use]
    pub fn from_env() -> Self {
        let runtime = std::env::var(BACKEND_URL_VAR).ok();
        let raw = runtime.as_deref().or(option_env!("CHAT_BACKEND_URL"));
        Self::from_raw(raw)
    }

    /// Resolve configuration for the running widget.
    ///
    /// In the browser the host-rendered `<meta>` tag wins, then the value
    /// baked in at build time. Elsewhere this is [`WidgetConfig::from_env`].
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::from_document().unwrap_or_else(|| Self::from_raw(option_env!("CHAT_BACKEND_URL")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::from_env()
        }
    }

    #[cfg(feature = "hydrate")]
    fn from_document() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{BACKEND_URL_META}\"]");
        let meta = document.query_selector(&selector).ok()??;
        let raw = meta.get_attribute("content")?;
        Some(Self::from_raw(Some(&raw)))
    }

    /// Build configuration from an optional raw base URL.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        let backend_url = raw
            .map(str::trim)
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_owned();
        Self { backend_url }
    }

    /// Endpoint for `POST /api/chat/message`.
    #[must_use]
    pub fn message_endpoint(&self) -> String {
        format!("{}{MESSAGE_PATH}", self.backend_url)
    }

    /// Endpoint for `POST /api/chat/lead`.
    #[must_use]
    pub fn lead_endpoint(&self) -> String {
        format!("{}{LEAD_PATH}", self.backend_url)
    }
}
