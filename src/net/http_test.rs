use super::*;

// =============================================================
// Bearer slot
// =============================================================

#[test]
fn bearer_round_trips_through_slot() {
    set_bearer(Some("abc123".to_owned()));
    assert_eq!(bearer(), Some("abc123".to_owned()));
    set_bearer(None);
    assert_eq!(bearer(), None);
}

#[test]
fn authorization_header_is_bearer_scheme() {
    assert_eq!(authorization_header("tok"), "Bearer tok");
}

// =============================================================
// 401 escalation policy
// =============================================================

#[test]
fn escalates_only_with_bearer_attached() {
    assert!(escalates_to_logout(401, true));
    assert!(!escalates_to_logout(401, false));
}

#[test]
fn non_401_statuses_never_escalate() {
    assert!(!escalates_to_logout(400, true));
    assert!(!escalates_to_logout(403, true));
    assert!(!escalates_to_logout(500, true));
    assert!(!escalates_to_logout(200, true));
}

#[test]
fn expiry_hook_fires_when_registered() {
    use std::cell::Cell;
    use std::rc::Rc;

    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    set_session_expired_hook(move || counter.set(counter.get() + 1));
    report_session_expired();
    report_session_expired();
    assert_eq!(fired.get(), 2);
}

// =============================================================
// Error payload extraction
// =============================================================

#[test]
fn error_message_prefers_error_then_message() {
    let body = serde_json::json!({"error": "e1", "message": "m1"});
    assert_eq!(error_message(400, &body), "e1");

    let body = serde_json::json!({"message": "m1"});
    assert_eq!(error_message(400, &body), "m1");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(502, &serde_json::Value::Null), "Request failed (502)");
    assert_eq!(
        error_message(400, &serde_json::json!({"error": 42})),
        "Request failed (400)"
    );
}

#[test]
fn error_message_keeps_server_copy_verbatim() {
    let body = serde_json::json!({"error": "Invalid email or password"});
    assert_eq!(error_message(401, &body), "Invalid email or password");
}
