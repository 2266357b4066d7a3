//! Application layer for Linkshelf: shared state wiring and the REST API.
//!
//! Exposed as a library so the end-to-end test suite can build the router
//! against a throwaway data directory; the `lshelf` binary is a thin CLI
//! around the same pieces.

pub mod http;
pub mod state;
