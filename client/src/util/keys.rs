//! Keyboard helpers for the message input.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Modifier keys held during a key event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    #[must_use]
    pub fn any(self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }

    #[must_use]
    pub fn from_event(ev: &leptos::ev::KeyboardEvent) -> Self {
        Self { shift: ev.shift_key(), ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() }
    }
}

/// Plain Enter submits; Enter with any modifier is left to the input.
#[must_use]
pub fn is_submit_key(key: &str, modifiers: Modifiers) -> bool {
    key == "Enter" && !modifiers.any()
}
