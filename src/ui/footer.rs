//! Footer bar with the key bindings of the current context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Hint text for a context.
#[must_use]
pub fn hints(context: InputContext) -> &'static str {
    match context {
        InputContext::Loading => "Esc:Back  q:Quit",
        InputContext::NotFound => "Enter:Go Back  r:Retry  f:Open Plot  ?:Help  q:Quit",
        InputContext::Detail => {
            "←/→:Image  1-9:Thumb  c:Copy Hash  o:Open  r:Refresh  f:Open Plot  Esc:Back  ?:Help  q:Quit"
        }
        InputContext::OpenPlotInput => "Enter:Open  Esc:Cancel",
        InputContext::Help => "Esc:Close",
    }
}

/// Renders the footer bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(hints(app.get_input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, loaded_app, mock_app};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn render_footer(app: &App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[rstest]
    fn test_footer_follows_context(mock_app: App, loaded_app: App) {
        let loading = render_footer(&mock_app, 100);
        assert!(loading.contains("Esc:Back"));
        assert!(!loading.contains("c:Copy Hash"));

        let detail = render_footer(&loaded_app, 100);
        for hint in ["c:Copy Hash", "o:Open", "r:Refresh", "q:Quit"] {
            assert!(detail.contains(hint), "missing {hint} in {detail}");
        }
    }

    #[rstest]
    fn test_footer_is_centered(mock_app: App) {
        let content = render_footer(&mock_app, 80);
        let leading = content.len() - content.trim_start().len();
        let trailing = content.len() - content.trim_end().len();
        assert!((leading as i32 - trailing as i32).abs() <= 1);
    }

    #[rstest]
    fn test_footer_survives_narrow_and_empty_areas(loaded_app: App) {
        let _ = render_footer(&loaded_app, 20);

        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 0), &loaded_app))
            .unwrap();
    }

    #[test]
    fn test_every_context_has_hints() {
        for context in [
            InputContext::Loading,
            InputContext::NotFound,
            InputContext::Detail,
            InputContext::OpenPlotInput,
            InputContext::Help,
        ] {
            assert!(!hints(context).is_empty());
        }
    }
}
