//! HTTP handlers grouped by resource.

pub mod auth;
pub mod bookmark;
pub mod user;
