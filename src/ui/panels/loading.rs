//! Loading panel.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::SPINNER_FRAMES;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};

/// Text shown while the plot is being fetched.
pub const LOADING_TEXT: &str = "Loading plot details...";

/// Renders a centered spinner; `tick` picks the frame.
pub fn render(frame: &mut Frame, area: Rect, tick: u64) {
    let spinner = SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize];
    let top = area.height.saturating_sub(1) / 2;

    let mut lines: Vec<Line> = (0..top).map(|_| Line::raw("")).collect();
    lines.push(Line::from(vec![
        Span::styled(spinner, Style::default().fg(PRIMARY_COLOR)),
        Span::styled(format!(" {LOADING_TEXT}"), Style::default().fg(MUTED_COLOR)),
    ]));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
