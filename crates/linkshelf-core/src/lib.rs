//! Business logic and repository trait definitions for Linkshelf.
//!
//! This crate defines the "ports" (repository and crypto traits) that the
//! infrastructure layer implements. It depends only on `linkshelf-types` --
//! never on `linkshelf-infra` or any database/IO crate.

pub mod repository;
pub mod service;
