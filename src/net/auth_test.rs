use super::*;

// =============================================================
// failure_message
// =============================================================

#[test]
fn server_message_is_shown_verbatim() {
    let err = ApiError::Server { status: 401, message: "Invalid email or password".to_owned() };
    assert_eq!(failure_message(&err, "Login failed"), "Invalid email or password");
}

#[test]
fn transport_failures_use_the_generic_fallback() {
    assert_eq!(failure_message(&ApiError::Timeout, "Login failed"), "Login failed");
    assert_eq!(
        failure_message(&ApiError::Network("connection refused".to_owned()), "Login failed"),
        "Login failed"
    );
    assert_eq!(
        failure_message(&ApiError::Decode("missing field".to_owned()), "Registration failed"),
        "Registration failed"
    );
}

#[test]
fn unauthorized_never_leaks_internal_wording() {
    assert_eq!(failure_message(&ApiError::Unauthorized, "Login failed"), "Login failed");
}
