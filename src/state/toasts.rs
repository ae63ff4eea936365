//! Transient notifications ("toasts").
//!
//! Every auth transition and form outcome produces exactly one toast;
//! validation errors render inline instead and never land here.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;
use uuid::Uuid;

/// How long a toast stays up before auto-dismissing.
#[cfg(feature = "hydrate")]
const TOAST_LIFETIME_SECS: u64 = 5;

/// Cap on simultaneously visible toasts; the oldest is dropped first.
const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A single transient notification.
#[derive(Clone, Debug)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// The visible toast stack.
#[derive(Clone, Debug, Default)]
pub struct ToastsState {
    pub toasts: Vec<Toast>,
}

impl ToastsState {
    /// Append a toast and return its id. Evicts the oldest entry past
    /// the cap.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> String {
        let id = Uuid::new_v4().to_string();
        self.toasts.push(Toast { id: id.clone(), kind, message: message.into() });
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
        id
    }

    /// Remove the toast with the given id. Returns whether one was
    /// removed; dismissing twice is harmless.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}

/// Push a toast onto the shared stack and schedule its auto-dismissal.
pub fn notify(toasts: RwSignal<ToastsState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let mut id = String::new();
    toasts.update(|t| id = t.push(kind, message));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_LIFETIME_SECS)).await;
            toasts.update(|t| {
                t.dismiss(&id);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
