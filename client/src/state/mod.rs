//! Client-side widget state.
//!
//! DESIGN
//! ======
//! State is split by concern (`messages`, `session`, `lead`, `chat`, `ui`)
//! so the pure pieces can be tested without a browser. `conversation` holds
//! the async flows that drive `chat` through the transport.

pub mod chat;
pub mod conversation;
pub mod lead;
pub mod messages;
pub mod session;
pub mod ui;
