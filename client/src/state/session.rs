//! Write-once conversation session id.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Server-correlated session id, assigned at most once.
///
/// Absent until the first successful exchange, which tells the backend to
/// start a new conversation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionCell {
    id: Option<String>,
}

impl SessionCell {
    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Assign the id if none is set yet.
    ///
    /// Returns `true` when this call stored the id.
    pub fn set(&mut self, id: &str) -> bool {
        if self.id.is_some() {
            return false;
        }
        self.id = Some(id.to_owned());
        true
    }
}
