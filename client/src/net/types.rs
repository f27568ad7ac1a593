//! Wire types for the chat backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's snake_case JSON. Timestamps arrive as
//! strings and are decoded into `DateTime<Utc>` here so the rest of the
//! widget only handles typed datetimes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::lead::Interest;
use crate::state::messages::{Message, Role};

/// Body of `POST /api/chat/message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessageRequest {
    pub session_id: Option<String>,
    pub message: String,
}

/// Response of `POST /api/chat/message`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendMessageResponse {
    pub session_id: String,
    pub user_message: WireMessage,
    pub assistant_message: WireMessage,
}

/// A message as the backend serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl From<WireMessage> for Message {
    fn from(wire: WireMessage) -> Self {
        Self { id: wire.id, role: wire.role, content: wire.content, timestamp: wire.timestamp }
    }
}

/// Body of `POST /api/chat/lead`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRequest {
    pub session_id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub interest: Interest,
}

/// Parse an RFC 3339 timestamp; a timestamp without offset is read as UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}
