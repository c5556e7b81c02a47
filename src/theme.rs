//! Theme and styling constants for the plotview TUI.
//!
//! Slate neutrals with an emerald accent, matching the listing site palette.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements, selected thumbnail, hash text.
pub const PRIMARY_COLOR: Color = Color::Rgb(5, 150, 105);

/// Heading text color.
pub const HEADING_COLOR: Color = Color::Rgb(241, 245, 249);

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color for labels and hints.
pub const MUTED_COLOR: Color = Color::Rgb(148, 163, 184);

/// Subtle border color.
pub const BORDER_COLOR: Color = Color::Rgb(71, 85, 105);

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for panels.
pub const BORDER_STYLE: Style = Style::new().fg(BORDER_COLOR);

/// Border style for the selected thumbnail and the price card.
pub const ACCENT_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Style for labels in key/value rows.
pub const LABEL_STYLE: Style = Style::new().fg(MUTED_COLOR);

/// Style for values in key/value rows.
pub const VALUE_STYLE: Style = Style::new()
    .fg(HEADING_COLOR)
    .add_modifier(Modifier::BOLD);

/// Style for section headings.
pub const HEADING_STYLE: Style = Style::new()
    .fg(HEADING_COLOR)
    .add_modifier(Modifier::BOLD);
