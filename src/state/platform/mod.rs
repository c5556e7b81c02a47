//! Platform-specific abstractions.
//!
//! - [`clipboard`] - Cross-platform clipboard access

pub mod clipboard;

pub use clipboard::{ClipboardBackend, ClipboardManager};
