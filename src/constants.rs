//! Application constants for the plotview TUI.
//!
//! Display symbols, layout sizes and timing values shared across modules.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// Interval between UI ticks (redraw, spinner frame, toast countdown).
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Toast lifetime in ticks.
pub const TOAST_TICKS: u8 = 20;

/// Toast lifetime in ticks for error toasts.
pub const ERROR_TOAST_TICKS: u8 = 30;

// ============================================================================
// Display Symbols
// ============================================================================

/// Currency glyph for rupee amounts.
pub const RUPEE_SYMBOL: &str = "₹";

/// Placeholder for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Characters of an integrity hash shown before the ellipsis.
pub const HASH_PREVIEW_LEN: usize = 16;

/// Braille spinner frames for the loading screen.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// ============================================================================
// Row-store Defaults
// ============================================================================

/// Table holding plot rows.
pub const DEFAULT_TABLE: &str = "plots";

// ============================================================================
// Layout
// ============================================================================

/// Thumbnails per row in the gallery strip.
pub const THUMBNAIL_COLUMNS: usize = 4;

/// Height of one thumbnail cell in rows.
pub const THUMBNAIL_HEIGHT: u16 = 3;

/// Thumbnails reachable with the number keys `1`-`9`.
pub const MAX_NUMBERED_THUMBNAILS: usize = 9;

/// Height of the header bar.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer bar.
pub const FOOTER_HEIGHT: u16 = 1;

/// Label of the back link on the detail page.
pub const BACK_LABEL: &str = "← Back to My Listings";
