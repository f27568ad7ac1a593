//! Widget UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` owns state and provides it via context; the bubble, window,
//! message rows, and lead form read and write that shared state.

pub mod chat_bubble;
pub mod chat_widget;
pub mod chat_window;
pub mod lead_form;
pub mod message_list;
