//! Utility helpers shared across widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic to improve reuse and testability.

pub mod keys;
pub mod notice;
pub mod time;
