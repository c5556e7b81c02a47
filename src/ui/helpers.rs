//! Helpers for consistently styled blocks and text rows.

use ratatui::{
    layout::Alignment,
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::theme::{ACCENT_BORDER_STYLE, BORDER_STYLE, HEADING_STYLE, LABEL_STYLE, VALUE_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// A rounded, bordered block.
///
/// Accented blocks (price card, selected thumbnail) use the primary color
/// and a double border.
#[must_use]
pub fn create_border_block(title: &str, accent: bool) -> Block<'_> {
    let (border_style, border_set) = if accent {
        (ACCENT_BORDER_STYLE, border::DOUBLE)
    } else {
        (BORDER_STYLE, border::ROUNDED)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border_set)
        .border_style(border_style);

    if title.is_empty() {
        block
    } else {
        block.title(format!(" {title} ")).title_style(HEADING_STYLE)
    }
}

/// Popup block with a centered title.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(ACCENT_BORDER_STYLE)
}

// ============================================================================
// Text Rows
// ============================================================================

/// `label` on the left, `value` padded to the right edge of `width`.
#[must_use]
pub fn key_value_line(
    label: impl Into<String>,
    value: impl Into<String>,
    value_style: Style,
    width: u16,
) -> Line<'static> {
    let label = label.into();
    let value = value.into();
    let used = label.chars().count() + value.chars().count();
    let gap = (width as usize).saturating_sub(used).max(1);

    Line::from(vec![
        Span::styled(label, LABEL_STYLE),
        Span::raw(" ".repeat(gap)),
        Span::styled(value, value_style),
    ])
}

/// A `[key] description` hint.
#[must_use]
pub fn key_hint(key: &str, description: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("[{key}]"), VALUE_STYLE),
        Span::styled(format!(" {description}"), LABEL_STYLE),
    ]
}

// ============================================================================
// Tests
// ============================================================================
