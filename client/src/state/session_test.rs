use super::*;

#[test]
fn session_default_is_absent() {
    assert!(SessionCell::default().get().is_none());
}

#[test]
fn first_set_assigns() {
    let mut session = SessionCell::default();
    assert!(session.set("s-1"));
    assert_eq!(session.get(), Some("s-1"));
}

#[test]
fn later_sets_are_ignored() {
    let mut session = SessionCell::default();
    session.set("s-1");
    assert!(!session.set("s-2"));
    assert!(!session.set("s-1"));
    assert_eq!(session.get(), Some("s-1"));
}
