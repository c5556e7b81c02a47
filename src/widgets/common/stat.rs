//! Labelled statistic card: a caption, a large value and a unit line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{LABEL_STYLE, VALUE_STYLE};
use crate::ui::helpers::create_border_block;

/// A bordered card such as
///
/// ```text
/// ╭──────────────╮
/// │ Total Area   │
/// │ 2,083        │
/// │ sq ft        │
/// ╰──────────────╯
/// ```
#[derive(Debug, Clone)]
pub struct StatCard<'a> {
    label: &'a str,
    value: String,
    caption: String,
}

impl<'a> StatCard<'a> {
    #[must_use]
    pub fn new(label: &'a str, value: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            caption: caption.into(),
        }
    }

    /// Rows needed including borders.
    pub const HEIGHT: u16 = 5;

    #[must_use]
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(self.label.to_string(), LABEL_STYLE)),
            Line::from(Span::styled(self.value.clone(), VALUE_STYLE)),
            Line::from(Span::styled(self.caption.clone(), LABEL_STYLE)),
        ]
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = create_border_block("", false);
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.to_lines()).render(inner, buf);
    }
}
