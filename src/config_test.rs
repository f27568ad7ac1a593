use super::*;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK`.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("CHAT_BACKEND_URL");
    }
}

#[test]
fn parse_port_defaults_when_absent() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_number() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 9000 ")), Ok(9000));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_host_env() };

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, None);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "4100");
        std::env::set_var("CHAT_BACKEND_URL", "https://chat.example.test/");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.backend_url.as_deref(), Some("https://chat.example.test"));

    unsafe { clear_host_env() };
}

#[test]
fn from_env_blank_backend_is_same_origin() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_host_env();
        std::env::set_var("CHAT_BACKEND_URL", "   ");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.backend_url, None);

    unsafe { clear_host_env() };
}

#[test]
fn widget_config_follows_backend_url() {
    let cfg = HostConfig { port: 3000, backend_url: Some("https://chat.example.test".to_owned()) };
    assert_eq!(cfg.widget_config().message_endpoint(), "https://chat.example.test/api/chat/message");

    let same_origin = HostConfig { port: 3000, backend_url: None };
    assert_eq!(same_origin.widget_config().lead_endpoint(), "/api/chat/lead");
}
