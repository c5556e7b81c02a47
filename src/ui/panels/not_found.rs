//! Not-found panel, shown for a missing record and for a failed fetch alike.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::{HEADING_STYLE, MUTED_COLOR};
use crate::ui::helpers::{create_border_block, key_hint};

pub const NOT_FOUND_TITLE: &str = "Plot Not Found";
pub const NOT_FOUND_TEXT: &str = "The plot you're looking for doesn't exist.";

/// Height of the message box including borders.
const BOX_HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame, area: Rect) {
    let width = area.width.min(56);
    let height = area.height.min(BOX_HEIGHT);
    let boxed = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let block = create_border_block("", false);
    let inner = block.inner(boxed);
    frame.render_widget(block, boxed);

    let lines = vec![
        Line::from(Span::styled(NOT_FOUND_TITLE, HEADING_STYLE)),
        Line::raw(""),
        Line::from(Span::styled(
            NOT_FOUND_TEXT,
            Style::default().fg(MUTED_COLOR),
        )),
        Line::raw(""),
        Line::from(key_hint("Enter", "Go Back")),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
