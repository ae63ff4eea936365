//! Per-entity comment thread state.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use crate::net::types::Comment;

#[derive(Clone, Debug, Default)]
pub struct CommentsState {
    pub items: Vec<Comment>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CommentsState {
    pub fn set_items(&mut self, items: Vec<Comment>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Append a freshly posted comment to the end of the thread.
    pub fn append(&mut self, comment: Comment) {
        self.items.push(comment);
        self.error = None;
    }
}
