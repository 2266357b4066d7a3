//! Request extractors: bearer token authentication, JSON bodies, and list
//! query params.

pub mod auth;
pub mod json;
pub mod query;
