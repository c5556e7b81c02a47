//! Image gallery widgets.
//!
//! A terminal cannot show the photographs themselves, so the gallery shows
//! which image is selected and where it lives. `o` opens it in a browser.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::constants::MAX_NUMBERED_THUMBNAILS;
use crate::theme::{HEADING_COLOR, LABEL_STYLE, MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::create_border_block;
use crate::widgets::helpers::{image_label, truncate_middle};

/// Placeholder shown when a listing has no images.
pub const NO_IMAGES_TEXT: &str = "No images available";

// ============================================================================
// Primary Image
// ============================================================================

/// The selected image, or the placeholder when there are none.
#[derive(Debug, Clone)]
pub struct PrimaryImage<'a> {
    reference: Option<&'a str>,
    index: usize,
    count: usize,
}

impl<'a> PrimaryImage<'a> {
    #[must_use]
    pub const fn new(reference: Option<&'a str>, index: usize, count: usize) -> Self {
        Self {
            reference,
            index,
            count,
        }
    }

    fn title(&self) -> String {
        if self.count == 0 {
            "Images".to_string()
        } else {
            format!("Image {} of {}", self.index + 1, self.count)
        }
    }
}

impl Widget for PrimaryImage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = self.title();
        let block = create_border_block(&title, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let top_padding = inner.height.saturating_sub(3) / 2;
        let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::raw("")).collect();

        match self.reference {
            Some(reference) => {
                lines.push(Line::from(Span::styled(
                    format!("▣ {}", image_label(reference)),
                    Style::default()
                        .fg(HEADING_COLOR)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::raw(""));
                lines.push(Line::from(Span::styled(
                    truncate_middle(reference, inner.width.saturating_sub(2) as usize),
                    LABEL_STYLE,
                )));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    NO_IMAGES_TEXT,
                    Style::default().fg(MUTED_COLOR),
                )));
            }
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

// ============================================================================
// Thumbnail
// ============================================================================

/// One cell of the thumbnail strip.
#[derive(Debug, Clone)]
pub struct Thumbnail<'a> {
    reference: &'a str,
    index: usize,
    selected: bool,
}

impl<'a> Thumbnail<'a> {
    #[must_use]
    pub const fn new(reference: &'a str, index: usize, selected: bool) -> Self {
        Self {
            reference,
            index,
            selected,
        }
    }

    fn text(&self, width: usize) -> String {
        let label = image_label(self.reference);
        let text = if self.index < MAX_NUMBERED_THUMBNAILS {
            format!("{} {label}", self.index + 1)
        } else {
            label.to_string()
        };
        truncate_middle(&text, width)
    }
}

impl Widget for Thumbnail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = create_border_block("", self.selected);
        let inner = block.inner(area);
        block.render(area, buf);

        let style = if self.selected {
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            LABEL_STYLE
        };

        Paragraph::new(Span::styled(self.text(inner.width as usize), style))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
