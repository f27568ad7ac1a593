//! Host configuration parsed from environment variables.

use chat_client::config::{BACKEND_URL_VAR, WidgetConfig};

pub const DEFAULT_PORT: u16 = 3000;

/// Configuration failure at startup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Chat backend base URL handed to the widget; `None` means same origin.
    pub backend_url: Option<String>,
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CHAT_BACKEND_URL`: chat backend base URL
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let backend_url = std::env::var(BACKEND_URL_VAR)
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());
        Ok(Self { port, backend_url })
    }

    /// Widget settings published to the browser through the page shell.
    #[must_use]
    pub fn widget_config(&self) -> WidgetConfig {
        WidgetConfig::from_raw(self.backend_url.as_deref())
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(v.to_string())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
