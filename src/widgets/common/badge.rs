//! Verification status badge widget.
//!
//! Displays the status icon and label in the status palette.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::domain::VerificationStatus;

// ============================================================================
// StatusBadge Widget
// ============================================================================

/// A colored, boxed badge for a verification status.
///
/// # Example
///
/// ```text
/// ┌────────────────────────┐
/// │ ◷ Pending Verification │
/// └────────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct StatusBadge<'a> {
    status: &'a VerificationStatus,
}

impl<'a> StatusBadge<'a> {
    #[must_use]
    pub const fn new(status: &'a VerificationStatus) -> Self {
        Self { status }
    }

    fn content(&self) -> String {
        format!(" {} {} ", self.status.icon(), self.status.label())
    }

    /// Cells the badge occupies horizontally.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.content().chars().count() as u16 + 2
    }

    /// Rows the badge occupies.
    #[must_use]
    pub const fn height(&self) -> u16 {
        3
    }

    /// Lines for rendering this badge.
    #[must_use]
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let palette = self.status.palette();
        let content = self.content();
        let text = Span::styled(content.clone(), palette.text_style());

        let edge = Style::default().fg(palette.border());
        let width = content.chars().count();
        vec![
            Line::from(Span::styled(format!("┌{}┐", "─".repeat(width)), edge)),
            Line::from(vec![
                Span::styled("│", edge),
                text,
                Span::styled("│", edge),
            ]),
            Line::from(Span::styled(format!("└{}┘", "─".repeat(width)), edge)),
        ]
    }
}

impl Widget for StatusBadge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, line) in self.to_lines().iter().enumerate() {
            if i >= area.height as usize {
                break;
            }
            let y = area.y + i as u16;
            let mut x = area.x;

            for span in &line.spans {
                for ch in span.content.chars() {
                    if x >= area.x + area.width {
                        break;
                    }
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(ch).set_style(span.style);
                    }
                    x += 1;
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
