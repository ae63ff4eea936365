use super::*;

fn user() -> User {
    User { id: 7, email: "new@example.com".to_owned(), role: None }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_loading_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn successful_login_populates_everything() {
    let mut state = SessionState::default();
    state.begin();
    state.finish_authenticated("tok-1".to_owned(), user());
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("new@example.com"));
    assert!(!state.loading);
}

#[test]
fn failed_login_leaves_session_unauthenticated() {
    let mut state = SessionState::default();
    state.begin();
    state.finish_unauthenticated();
    assert!(!state.is_authenticated());
    assert!(state.token.is_none());
    assert!(!state.loading);
}

#[test]
fn logout_clears_regardless_of_prior_state() {
    let mut state = SessionState::default();
    state.finish_authenticated("tok-1".to_owned(), user());
    state.finish_unauthenticated();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn double_logout_is_idempotent() {
    let mut state = SessionState::default();
    state.finish_authenticated("tok-1".to_owned(), user());
    state.finish_unauthenticated();
    let after_first = state.clone();
    state.finish_unauthenticated();
    assert_eq!(state, after_first);
}

#[test]
fn restore_reproduces_the_same_session() {
    // A reload re-runs initialize with the persisted token; applying the
    // same verification outcome must reproduce the same state.
    let mut first = SessionState::default();
    first.finish_authenticated("tok-1".to_owned(), user());

    let mut reloaded = SessionState::default();
    reloaded.finish_authenticated("tok-1".to_owned(), user());
    assert_eq!(first, reloaded);
    assert!(reloaded.is_authenticated());
}

#[test]
fn replace_token_keeps_identity() {
    let mut state = SessionState::default();
    state.finish_authenticated("tok-1".to_owned(), user());
    state.replace_token("tok-2".to_owned());
    assert_eq!(state.token.as_deref(), Some("tok-2"));
    assert!(state.is_authenticated());
}

// =============================================================
// Forced logout collapse
// =============================================================

#[test]
fn expire_reports_a_transition_only_once() {
    let mut state = SessionState::default();
    state.finish_authenticated("tok-1".to_owned(), user());
    assert!(state.expire());
    assert!(!state.expire());
    assert!(!state.is_authenticated());
}

#[test]
fn expire_on_empty_session_is_a_noop() {
    let mut state = SessionState::default();
    assert!(!state.expire());
    assert!(!state.loading);
}

// =============================================================
// Invariants
// =============================================================

#[test]
fn token_alone_is_not_authenticated() {
    // During initialize the token is known before the identity is
    // verified; the derived flag must stay false until both are held.
    let mut state = SessionState::default();
    state.replace_token("tok-1".to_owned());
    assert!(!state.is_authenticated());
}
