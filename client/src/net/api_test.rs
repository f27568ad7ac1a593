use super::*;
use crate::state::lead::Interest;

#[test]
fn check_status_accepts_2xx() {
    assert!(check_status(200).is_ok());
    assert!(check_status(201).is_ok());
    assert!(check_status(204).is_ok());
}

#[test]
fn check_status_rejects_other_codes() {
    assert_eq!(check_status(500), Err(TransportError::Status(500)));
    assert_eq!(check_status(404), Err(TransportError::Status(404)));
    assert_eq!(check_status(302), Err(TransportError::Status(302)));
}

#[test]
fn transport_error_messages() {
    assert_eq!(TransportError::Status(502).to_string(), "backend returned status 502");
    assert_eq!(
        TransportError::Unavailable.to_string(),
        "transport not available outside the browser"
    );
}

#[test]
fn http_transport_keeps_config() {
    let transport = HttpTransport::new(WidgetConfig::from_raw(Some("http://api.test/")));
    assert_eq!(transport.config().message_endpoint(), "http://api.test/api/chat/message");
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn http_transport_is_unavailable_outside_browser() {
    let transport = HttpTransport::new(WidgetConfig::default());
    let send = SendMessageRequest { session_id: None, message: "Hi".to_owned() };
    assert_eq!(transport.send_message(&send).await, Err(TransportError::Unavailable));

    let lead = LeadRequest {
        session_id: None,
        name: "Jo".to_owned(),
        email: "jo@x.com".to_owned(),
        phone: None,
        company: None,
        interest: Interest::Recruiting,
    };
    assert_eq!(transport.submit_lead(&lead).await, Err(TransportError::Unavailable));
}
