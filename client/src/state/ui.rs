//! Widget chrome state.
//!
//! DESIGN
//! ======
//! Only the open/closed toggle lives here. Conversation data, including the
//! lead form flag, stays in `chat` so it survives the window closing.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Presentation state of the floating widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub open: bool,
}

impl UiState {
    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Accessible label for the bubble in the current state.
    #[must_use]
    pub fn bubble_label(self) -> &'static str {
        if self.open { "Close chat" } else { "Open chat" }
    }
}
