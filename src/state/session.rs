//! The authentication session: the single process-wide record of "is
//! this client authenticated, and as whom."
//!
//! One instance exists per running client, created in `App` and shared
//! by context. Readers (route guard, nav bar, notification bell) only
//! observe it; every mutation goes through the transition methods below,
//! driven by the operations in [`crate::net::auth`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Client-side authentication state.
///
/// `loading` starts true and stays true until the startup check in
/// [`crate::net::auth::initialize`] lands a definitive outcome, so the
/// route guard can block rendering decisions instead of flashing
/// unauthenticated content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { token: None, user: None, loading: true }
    }
}

impl SessionState {
    /// True iff both the credential and the identity it proves are held.
    /// Never true while `token` is absent.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Mark an auth operation in flight. Set synchronously before the
    /// operation first suspends.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Apply a successful login, registration, or session restore.
    pub fn finish_authenticated(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    /// Apply a definitive logged-out outcome: failed restore, rejected
    /// credentials, or an explicit logout. Idempotent.
    pub fn finish_unauthenticated(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// Swap in a refreshed credential without touching the identity.
    pub fn replace_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Forced logout: the server rejected a held credential. Returns
    /// whether anything was actually cleared, so concurrent 401s
    /// collapse into a single user-visible transition.
    pub fn expire(&mut self) -> bool {
        let held = self.token.is_some() || self.user.is_some();
        self.finish_unauthenticated();
        held
    }
}
