//! GreenLog Core - Client logic for the GreenLog desktop application
//!
//! This crate contains all business logic with zero UI dependencies:
//! configuration, the analysis service HTTP client, the session state
//! container, and document ingestion helpers.

pub mod client;
pub mod config;
pub mod document;
pub mod logging;
pub mod models;
pub mod session;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
