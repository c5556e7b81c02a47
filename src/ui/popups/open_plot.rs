//! Prompt for opening another plot by id.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::PlotIdInput;
use crate::theme::{BORDER_STYLE, ERROR_COLOR, MUTED_COLOR};
use crate::ui::helpers::{create_popup_block, key_hint};
use crate::ui::layout::centered_popup_area;

const CURSOR: &str = "▏";

/// Renders the prompt with the typed id and a cursor.
pub fn render(frame: &mut Frame, area: Rect, input: &PlotIdInput) {
    let popup_area = centered_popup_area(area, 56, 9);

    let popup_block = create_popup_block("Open Plot");
    let inner_area = popup_block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block, popup_area);

    if inner_area.height < 5 || inner_area.width < 6 {
        return;
    }

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
        .title(" Plot ID ");
    let input_area = Rect::new(
        inner_area.x + 2,
        inner_area.y + 1,
        inner_area.width - 4,
        3,
    );
    let text_area = input_block.inner(input_area);
    frame.render_widget(input_block, input_area);
    frame.render_widget(
        Paragraph::new(format!("{}{CURSOR}", input.value())),
        text_area,
    );

    let hint = if input.submission().is_some() {
        let mut spans = key_hint("Enter", "Open");
        spans.push(Span::raw("  "));
        spans.extend(key_hint("Esc", "Cancel"));
        Line::from(spans)
    } else if input.value().is_empty() {
        Line::from(Span::styled(
            "Type a plot id",
            Style::default().fg(MUTED_COLOR),
        ))
    } else {
        Line::from(Span::styled(
            "Plot id cannot be blank",
            Style::default().fg(ERROR_COLOR),
        ))
    };

    let hint_area = Rect::new(inner_area.x, input_area.bottom() + 1, inner_area.width, 1);
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), hint_area);
}
