//! Blocking user notices.
//!
//! In the browser this is `window.alert`. Outside the browser the notice is
//! only logged.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Show a blocking notice to the user.
///
/// Returns `true` if a browser dialog was shown.
pub fn alert(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window.alert_with_message(message).is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::warn!("notice: {message}");
        false
    }
}
