//! Shared domain types for Linkshelf.
//!
//! This crate contains the core domain types used across the Linkshelf
//! service: User, Bookmark, Session, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod bookmark;
pub mod error;
pub mod session;
pub mod user;
