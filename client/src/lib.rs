//! # chat-client
//!
//! Leptos + WASM chat widget: a floating bubble that toggles a chat window,
//! exchanges messages with the chat backend, and collects sales leads.
//!
//! This crate contains the widget components, conversation state, wire
//! types, and the HTTP transport. The `hydrate` feature builds the browser
//! bundle; the `ssr` feature lets the host binary server-render the page.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point invoked by the hydrate bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
