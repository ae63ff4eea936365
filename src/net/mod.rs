//! Network layer: the request pipeline, typed REST calls, auth
//! operations, and wire types.

pub mod api;
pub mod auth;
pub mod http;
pub mod types;
