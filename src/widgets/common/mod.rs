//! Small widgets composed into the detail page:
//!
//! - [`StatusBadge`]: verification status with icon and palette
//! - [`PriceDisplay`]: headline price and per-square-foot rate
//! - [`StatCard`]: captioned value card for dimensions and ownership

mod amount;
mod badge;
mod stat;

pub use amount::PriceDisplay;
pub use badge::StatusBadge;
pub use stat::StatCard;
