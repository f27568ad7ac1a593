use super::*;

#[test]
fn from_raw_strips_trailing_slashes() {
    let cfg = WidgetConfig::from_raw(Some("https://chat.example.test//"));
    assert_eq!(cfg.backend_url, "https://chat.example.test");
}

#[test]
fn from_raw_none_means_same_origin() {
    let cfg = WidgetConfig::from_raw(None);
    assert_eq!(cfg.backend_url, "");
    assert_eq!(cfg.message_endpoint(), "/api/chat/message");
    assert_eq!(cfg.lead_endpoint(), "/api/chat/lead");
}

#[test]
fn from_raw_trims_whitespace() {
    let cfg = WidgetConfig::from_raw(Some("  http://localhost:8001/ \n"));
    assert_eq!(cfg.backend_url, "http://localhost:8001");
}

#[test]
fn endpoints_join_base_url() {
    let cfg = WidgetConfig::from_raw(Some("http://localhost:8001"));
    assert_eq!(cfg.message_endpoint(), "http://localhost:8001/api/chat/message");
    assert_eq!(cfg.lead_endpoint(), "http://localhost:8001/api/chat/lead");
}

#[test]
fn detect_outside_browser_matches_env() {
    assert_eq!(WidgetConfig::detect(), WidgetConfig::from_env());
}
