//! Reusable widgets and formatting helpers for the plot detail page.
//!
//! # Module Structure
//!
//! - [`helpers`]: pure formatters for prices, areas, dates and hashes
//! - [`common`]: status badge, price display and stat cards
//! - [`gallery`]: primary image and thumbnail cells

pub mod common;
pub mod gallery;
pub mod helpers;

pub use common::{PriceDisplay, StatCard, StatusBadge};
