use super::*;

fn draft(name: &str, email: &str) -> LeadDraft {
    LeadDraft { name: name.to_owned(), email: email.to_owned(), ..LeadDraft::default() }
}

// =============================================================
// Interest
// =============================================================

#[test]
fn interest_default_is_recruiting() {
    assert_eq!(Interest::default(), Interest::Recruiting);
}

#[test]
fn interest_form_values_parse_back() {
    for interest in Interest::ALL {
        assert_eq!(Interest::from_form_value(interest.as_str()), interest);
    }
}

#[test]
fn interest_unknown_form_value_falls_back() {
    assert_eq!(Interest::from_form_value("bogus"), Interest::Recruiting);
}

#[test]
fn interest_serializes_as_form_value() {
    let json = serde_json::to_string(&Interest::Consultation).unwrap();
    assert_eq!(json, "\"consultation\"");
}

// =============================================================
// LeadDraft validation
// =============================================================

#[test]
fn missing_email_is_rejected() {
    let err = draft("Jo", "").into_request(None).unwrap_err();
    assert_eq!(err, ValidationError::MissingRequired);
}

#[test]
fn missing_name_is_rejected() {
    assert!(draft("", "jo@x.com").into_request(None).is_err());
}

#[test]
fn whitespace_only_fields_are_rejected() {
    assert!(draft("  ", "jo@x.com").into_request(None).is_err());
    assert!(draft("Jo", " \t").into_request(None).is_err());
}

#[test]
fn valid_draft_builds_request() {
    let mut lead = draft(" Jo ", "jo@x.com");
    lead.company = "Acme".to_owned();
    lead.interest = Interest::Software;

    let req = lead.into_request(Some("s-1")).unwrap();
    assert_eq!(req.session_id.as_deref(), Some("s-1"));
    assert_eq!(req.name, "Jo");
    assert_eq!(req.email, "jo@x.com");
    assert_eq!(req.phone, None);
    assert_eq!(req.company.as_deref(), Some("Acme"));
    assert_eq!(req.interest, Interest::Software);
}

#[test]
fn validation_message_matches_notice_text() {
    assert_eq!(
        ValidationError::MissingRequired.to_string(),
        "Please fill in required fields (Name and Email)"
    );
}
