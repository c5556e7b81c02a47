//! Price display widget.
//!
//! Renders the headline price with the per-square-foot rate beneath it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{HEADING_COLOR, LABEL_STYLE};
use crate::widgets::helpers::{format_price_display, format_price_per_sqft};

// ============================================================================
// PriceDisplay Widget
// ============================================================================

/// Headline price and rate.
///
/// # Example
///
/// ```text
/// ₹25.00 L
/// ₹1,200 per sq ft
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDisplay {
    price: f64,
    price_per_sqft: f64,
}

impl PriceDisplay {
    #[must_use]
    pub const fn new(price: f64, price_per_sqft: f64) -> Self {
        Self {
            price,
            price_per_sqft,
        }
    }

    #[must_use]
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                format_price_display(self.price),
                Style::default()
                    .fg(HEADING_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format_price_per_sqft(self.price_per_sqft),
                LABEL_STYLE,
            )),
        ]
    }
}

impl Widget for PriceDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.to_lines()).render(area, buf);
    }
}
