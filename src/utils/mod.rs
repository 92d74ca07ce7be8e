//! Utility modules for network and browser operations.
//!
//! Provides:
//! - [`get_text`], [`post_json`] - Network fetching with timeout
//! - [`clipboard`] - Best-effort clipboard writes
//! - [`FetchError`] - Structured fetch failure categories

pub mod clipboard;
mod fetch;

pub use fetch::{FetchError, RaceResult, get_text, post_json, race_with_timeout};
