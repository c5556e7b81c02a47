//! Feedback toast for copy, open-image and open-plot actions.
//!
//! The box sits at the right edge just above the footer so it never covers
//! the back link or the key hints.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Clear, Paragraph},
};

use crate::constants::FOOTER_HEIGHT;
use crate::theme::{ERROR_COLOR, HEADING_COLOR, SUCCESS_COLOR};
use crate::widgets::helpers::truncate_middle;

/// Rows including borders.
const HEIGHT: u16 = 3;

/// Border plus one blank cell each side.
const CHROME: u16 = 4;

/// Outcome encoded in the message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Failure,
    Neutral,
}

impl Tone {
    fn of(message: &str) -> Self {
        if message.starts_with("[+]") {
            Self::Success
        } else if message.starts_with("[x]") {
            Self::Failure
        } else {
            Self::Neutral
        }
    }

    const fn color(self) -> Color {
        match self {
            Self::Success => SUCCESS_COLOR,
            Self::Failure => ERROR_COLOR,
            Self::Neutral => HEADING_COLOR,
        }
    }
}

/// Draws `message` over whatever is on screen.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let Some(rect) = toast_area(area, message) else {
        return;
    };
    let color = Tone::of(message).color();
    let text = truncate_middle(message, rect.width.saturating_sub(CHROME) as usize);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(block),
        rect,
    );
}

/// Right-aligned box above the footer, or `None` when the screen is too small.
fn toast_area(area: Rect, message: &str) -> Option<Rect> {
    let bottom = area.bottom().checked_sub(FOOTER_HEIGHT)?;
    let top = bottom.checked_sub(HEIGHT).filter(|top| *top >= area.y)?;

    let width = (message.chars().count() as u16 + CHROME).min(area.width.saturating_sub(1));
    if width <= CHROME {
        return None;
    }

    let x = area.right().saturating_sub(width + 1);
    Some(Rect::new(x, top, width, HEIGHT))
}
