//! Help popup listing the key bindings by section.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::theme::{LABEL_STYLE, PRIMARY_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Keybinding Data
// ============================================================================

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Page",
        &[
            ("Esc / b", "Back to previous plot or listings"),
            ("r", "Refresh plot"),
            ("f", "Open another plot by id"),
            ("?", "Toggle help"),
            ("q", "Quit"),
        ],
    ),
    (
        "Gallery",
        &[
            ("← / h", "Previous image"),
            ("→ / l", "Next image"),
            ("1-9 / click", "Select thumbnail"),
            ("o", "Open image in browser"),
            ("c", "Copy blockchain hash"),
        ],
    ),
    (
        "Open Plot",
        &[("Enter", "Open"), ("Esc", "Cancel")],
    ),
];

// ============================================================================
// Public API
// ============================================================================

/// Renders the help popup, 70% of the width and up to 80% of the height.
pub fn render(frame: &mut Frame, area: Rect) {
    let width = (area.width * 7 / 10).max(50).min(area.width);
    let height = (area.height * 8 / 10).max(20).min(area.height);
    let popup_area = centered_popup_area(area, width, height);

    let block = create_popup_block("Help (? to close)");
    let inner = block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    frame.render_widget(Paragraph::new(help_lines()), inner);
}

fn help_lines() -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(PRIMARY_COLOR)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (index, (section, bindings)) in HELP_SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(*section, heading)));
        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!(" {key:<14}"), Style::default().fg(PRIMARY_COLOR)),
                Span::styled(*description, LABEL_STYLE),
            ]));
        }
    }
    lines
}

// ============================================================================
// Tests
// ============================================================================
