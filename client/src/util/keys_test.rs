use super::*;

#[test]
fn plain_enter_submits() {
    assert!(is_submit_key("Enter", Modifiers::default()));
}

#[test]
fn enter_with_modifier_does_not_submit() {
    let shift = Modifiers { shift: true, ..Modifiers::default() };
    let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };
    let alt = Modifiers { alt: true, ..Modifiers::default() };
    let meta = Modifiers { meta: true, ..Modifiers::default() };
    for modifiers in [shift, ctrl, alt, meta] {
        assert!(!is_submit_key("Enter", modifiers));
    }
}

#[test]
fn other_keys_do_not_submit() {
    assert!(!is_submit_key("a", Modifiers::default()));
    assert!(!is_submit_key("Escape", Modifiers::default()));
}
