//! HTTP route handlers.

pub mod root;
