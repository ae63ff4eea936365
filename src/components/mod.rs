//! Reusable UI components.

pub mod comments_thread;
pub mod nav_bar;
pub mod notification_bell;
pub mod protected;
pub mod toast_tray;
