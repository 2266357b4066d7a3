//! Observability helpers for Linkshelf.

pub mod tracing_setup;
