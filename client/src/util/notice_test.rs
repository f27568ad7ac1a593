#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn alert_outside_browser_only_logs() {
    assert!(!alert("Please fill in required fields (Name and Email)"));
}
