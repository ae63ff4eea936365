//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `board`, `notifications`, etc.)
//! so individual components can depend on small focused models. Each
//! struct is plain data with pure mutator methods; the view tree shares
//! them as `RwSignal` contexts, and only the enumerated mutators touch
//! the fields.

pub mod board;
pub mod comments;
pub mod kpi;
pub mod notifications;
pub mod session;
pub mod toasts;
