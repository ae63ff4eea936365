//! Session operations: the only code paths allowed to mutate the shared
//! [`SessionState`].
//!
//! Five operations cover the whole token lifecycle (`initialize`,
//! `login`, `register`, `logout`, `refresh_token`), plus the forced
//! logout handler the request pipeline invokes on 401. Each catches at
//! its own boundary and returns a tagged result; no transport error
//! escapes this module.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::api;
use super::http::{self, ApiError};
use super::types::{LoginRequest, RegisterRequest};
use crate::state::session::SessionState;
use crate::state::toasts::{self, ToastKind, ToastsState};
use crate::util::storage;

/// One-shot session restore, run once at application start.
///
/// No persisted token means logged-out. Otherwise the token is attached
/// and verified against the identity endpoint; any failure (401,
/// network, malformed response) discards it and fails closed. Always
/// ends with `loading` cleared. Not retried.
pub async fn initialize(session: RwSignal<SessionState>) {
    let Some(token) = storage::read_token() else {
        session.update(SessionState::finish_unauthenticated);
        return;
    };
    http::set_bearer(Some(token.clone()));
    match api::fetch_current_user().await {
        Ok(user) => session.update(|s| s.finish_authenticated(token, user)),
        Err(err) => {
            leptos::logging::warn!("session restore failed: {err}");
            storage::clear_token();
            http::set_bearer(None);
            session.update(SessionState::finish_unauthenticated);
        }
    }
}

/// Exchange credentials for a session. On failure the session is left
/// unauthenticated and the returned message is displayable as-is.
pub async fn login(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastsState>,
    email: &str,
    password: &str,
) -> Result<(), String> {
    session.update(SessionState::begin);
    let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    match api::login(&payload).await {
        Ok(response) => {
            establish(session, response);
            toasts::notify(toasts, ToastKind::Success, "Signed in successfully");
            Ok(())
        }
        Err(err) => {
            session.update(SessionState::finish_unauthenticated);
            let message = failure_message(&err, "Login failed");
            toasts::notify(toasts, ToastKind::Error, message.clone());
            Err(message)
        }
    }
}

/// Create an account and authenticate the new session immediately.
pub async fn register(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastsState>,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    session.update(SessionState::begin);
    let payload = RegisterRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm_password.to_owned(),
    };
    match api::register(&payload).await {
        Ok(response) => {
            establish(session, response);
            toasts::notify(toasts, ToastKind::Success, "Account created successfully");
            Ok(())
        }
        Err(err) => {
            session.update(SessionState::finish_unauthenticated);
            let message = failure_message(&err, "Registration failed");
            toasts::notify(toasts, ToastKind::Error, message.clone());
            Err(message)
        }
    }
}

/// Discard the credential and reset the session. Synchronous, no server
/// call (the token is stateless), and idempotent.
pub fn logout(session: RwSignal<SessionState>, toasts: RwSignal<ToastsState>) {
    storage::clear_token();
    http::set_bearer(None);
    session.update(SessionState::finish_unauthenticated);
    toasts::notify(toasts, ToastKind::Info, "Signed out");
}

/// Swap the current token for a fresh one. Invoked opportunistically
/// (once after a successful restore), never on a schedule. On failure
/// falls back to [`logout`], failing closed.
pub async fn refresh_token(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastsState>,
) -> bool {
    match api::refresh().await {
        Ok(refreshed) => {
            storage::write_token(&refreshed.token);
            http::set_bearer(Some(refreshed.token.clone()));
            session.update(|s| s.replace_token(refreshed.token));
            true
        }
        Err(err) => {
            leptos::logging::warn!("token refresh failed: {err}");
            logout(session, toasts);
            false
        }
    }
}

/// Install the pipeline hook that turns a 401 on any authenticated call
/// into a forced logout. The toast and the state transition happen at
/// most once per expiry even when several in-flight calls fail
/// together; the route guard handles the redirect to the login surface.
pub fn install_session_expiry_handler(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastsState>,
) {
    http::set_session_expired_hook(move || {
        storage::clear_token();
        http::set_bearer(None);
        let mut expired = false;
        session.update(|s| expired = s.expire());
        if expired {
            toasts::notify(
                toasts,
                ToastKind::Error,
                "Your session has expired. Please sign in again.",
            );
        }
    });
}

/// Common tail of a successful login/register: persist the credential,
/// attach it to the pipeline, and populate the session.
fn establish(session: RwSignal<SessionState>, response: crate::net::types::AuthResponse) {
    storage::write_token(&response.token);
    http::set_bearer(Some(response.token.clone()));
    session.update(|s| s.finish_authenticated(response.token, response.user));
}

/// Reduce an [`ApiError`] to the message shown to the user: the server's
/// own words when it sent any, a generic fallback otherwise.
fn failure_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Server { message, .. } => message.clone(),
        ApiError::Unauthorized
        | ApiError::Timeout
        | ApiError::Network(_)
        | ApiError::Decode(_)
        | ApiError::Unavailable => fallback.to_owned(),
    }
}
