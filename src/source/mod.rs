//! Reading source abstraction for fetching raw API responses.
//!
//! This module provides a trait-based abstraction over where response bodies
//! come from, so the cycle driver can run against the LibreLinkUp API or a
//! scripted source in tests.

mod error;
mod libreview;

pub use error::FetchError;
pub use libreview::{LibreViewClient, LibreViewClientBuilder, LibreViewSource, DEFAULT_BASE_URL};

use std::fmt::Debug;

/// Trait for fetching the latest glucose response body.
///
/// # Example
///
/// ```no_run
/// use glucose_tracker::{LibreViewSource, ReadingSource};
///
/// let mut source = LibreViewSource::new("patient-id", "token").unwrap();
/// if let Some(body) = source.fetch() {
///     println!("Got {}", body);
/// }
/// ```
pub trait ReadingSource: Debug {
    /// Fetch the latest response body.
    ///
    /// Returns `None` on any failure. This call may block.
    fn fetch(&mut self) -> Option<serde_json::Value>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// Returns the error message from the last fetch, if it failed.
    fn error(&self) -> Option<&str>;
}
