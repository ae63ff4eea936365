//! Notification bell state.
//!
//! The unread count is fetched once on mount; the list is fetched
//! lazily when the dropdown first opens. Marking an item read decrements
//! the count with a floor of zero.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::Notification;

#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub unread_count: u32,
    pub open: bool,
    pub loading: bool,
    /// Whether the list has been fetched at least once.
    pub loaded: bool,
    pub error: Option<String>,
}

impl NotificationsState {
    /// Replace the list after a successful fetch.
    pub fn set_items(&mut self, items: Vec<Notification>) {
        self.items = items;
        self.loaded = true;
        self.loading = false;
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Mark a notification read and decrement the unread count. Returns
    /// false (and changes nothing) for unknown or already-read ids.
    pub fn mark_read(&mut self, id: i64) -> bool {
        let Some(item) = self.items.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        if item.read {
            return false;
        }
        item.read = true;
        self.unread_count = self.unread_count.saturating_sub(1);
        true
    }
}
