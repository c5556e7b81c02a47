//! Row-store access for plot listings.
//!
//! The view only needs one operation from storage: fetch a single plot by
//! identifier. [`PlotStore`] captures that seam; [`SupabaseClient`] is the
//! PostgREST implementation used at runtime, and tests substitute an
//! in-memory store.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{HttpConfig, PlotStore, SupabaseClient};
//!
//! let client = SupabaseClient::new(url, anon_key, "plots", &HttpConfig::default())?;
//! let plot = client.fetch_one("plot-42").await?;
//! ```

use async_trait::async_trait;

use crate::domain::{Plot, PlotError};

pub mod http;
pub mod supabase;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::HttpConfig;
pub use supabase::SupabaseClient;

// ============================================================================
// Plot Store
// ============================================================================

/// Single-row lookup by primary key.
#[async_trait]
pub trait PlotStore: Send + Sync + std::fmt::Debug {
    /// Fetch the plot with the given id.
    ///
    /// Zero matching rows is `Ok(None)`, not an error.
    async fn fetch_one(&self, id: &str) -> Result<Option<Plot>, PlotError>;
}

/// Trim and check a plot identifier.
///
/// # Errors
///
/// Returns `PlotError::InvalidInput` for an empty or blank identifier.
pub fn validate_plot_id(id: &str) -> Result<&str, PlotError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(PlotError::invalid_input("plot id must not be empty"));
    }
    Ok(trimmed)
}
