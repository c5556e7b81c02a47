//! Content panels, one per view state.
//!
//! - [`loading`]: spinner while the fetch is in flight
//! - [`not_found`]: missing record or failed fetch
//! - [`detail`]: the loaded listing

pub mod detail;
pub mod loading;
pub mod not_found;
