//! Header bar: back link on the left, page title and plot id on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::BACK_LABEL;
use crate::state::App;
use crate::theme::{HEADING_STYLE, MUTED_COLOR, PRIMARY_COLOR};

use super::helpers::create_border_block;

/// Render the header. `back_link` comes from the shared layout.
pub fn render(frame: &mut Frame, area: Rect, back_link: Rect, app: &App) {
    let header_block = create_border_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    let title = Line::from(vec![
        Span::styled("Plot Details", HEADING_STYLE),
        Span::styled(
            format!("  {}", app.view.target()),
            Style::default().fg(PRIMARY_COLOR),
        ),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Right), inner);

    let back = Paragraph::new(Span::styled(
        BACK_LABEL,
        Style::default()
            .fg(MUTED_COLOR)
            .add_modifier(Modifier::UNDERLINED),
    ));
    frame.render_widget(back, back_link);
}
