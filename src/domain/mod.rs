//! Domain types for the plotview listing viewer.
//!
//! # Module Organization
//!
//! - [`error`] - Error type for row-store operations
//! - [`plot`] - The plot listing record
//! - [`status`] - Verification status and its presentation table

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod plot;
pub mod status;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::PlotError;
pub use plot::Plot;
pub use status::{VerificationStatus, humanize_status};
