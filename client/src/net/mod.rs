//! Networking modules for the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and its HTTP implementation, `types`
//! defines the wire schema.

pub mod api;
pub mod types;
