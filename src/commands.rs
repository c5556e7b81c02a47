//! Command pattern for key event handling.
//!
//! Key events are translated into [`AppCommand`]s by the [`KeyMapper`]
//! according to the current [`InputContext`]. The mapping is pure, so every
//! binding can be tested without an application instance.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::constants::MAX_NUMBERED_THUMBNAILS;

// ============================================================================
// Input Context
// ============================================================================

/// Which set of key bindings is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Fetch in flight.
    Loading,
    /// No record for the identifier.
    NotFound,
    /// Record shown.
    Detail,
    /// Prompt asking for another plot identifier.
    OpenPlotInput,
    /// Help overlay.
    Help,
}

// ============================================================================
// App Commands
// ============================================================================

/// Everything the user can ask the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Return to the previous plot, or leave when there is none.
    GoBack,
    /// Fetch the current identifier again.
    Refresh,
    /// Toggle the help overlay.
    ToggleHelp,

    // === Popup Control ===
    /// Open the "open plot by id" prompt.
    OpenPlotPrompt,
    /// Close the current popup.
    Dismiss,

    // === Gallery ===
    /// Select the previous image.
    PreviousImage,
    /// Select the next image.
    NextImage,
    /// Select the image at this zero-based index.
    SelectImage(usize),

    // === Detail Actions ===
    /// Copy the full blockchain hash.
    CopyHash,
    /// Open the selected image in the system browser.
    OpenImage,

    // === Text Input ===
    /// Type a character into the prompt.
    TypeChar(char),
    /// Delete the last character of the prompt.
    Backspace,
    /// Submit the prompt.
    SubmitPlotId,

    // === No Operation ===
    /// Unhandled key.
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command.
    ///
    /// Ctrl+C quits from every context except the prompt, where it only
    /// closes the prompt.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return match context {
                InputContext::OpenPlotInput => AppCommand::Dismiss,
                _ => AppCommand::Quit,
            };
        }

        match context {
            InputContext::Loading => Self::map_loading_keys(key),
            InputContext::NotFound => Self::map_not_found_keys(key),
            InputContext::Detail => Self::map_detail_keys(key),
            InputContext::OpenPlotInput => Self::map_plot_input_keys(key),
            InputContext::Help => Self::map_help_keys(key),
        }
    }

    /// Keys shared by every page context.
    fn map_common_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => AppCommand::GoBack,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    fn map_loading_keys(key: KeyEvent) -> AppCommand {
        Self::map_common_keys(key)
    }

    fn map_not_found_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter => AppCommand::GoBack,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('f') => AppCommand::OpenPlotPrompt,
            KeyCode::Char('?') => AppCommand::ToggleHelp,
            _ => Self::map_common_keys(key),
        }
    }

    fn map_detail_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => AppCommand::PreviousImage,
            KeyCode::Right | KeyCode::Char('l') => AppCommand::NextImage,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < MAX_NUMBERED_THUMBNAILS {
                    AppCommand::SelectImage(index)
                } else {
                    AppCommand::Noop
                }
            }
            KeyCode::Char('c') => AppCommand::CopyHash,
            KeyCode::Char('o') => AppCommand::OpenImage,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('f') => AppCommand::OpenPlotPrompt,
            KeyCode::Char('?') => AppCommand::ToggleHelp,
            _ => Self::map_common_keys(key),
        }
    }

    fn map_plot_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::SubmitPlotId,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_help_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => AppCommand::ToggleHelp,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

/// Shorthand for [`KeyMapper::map_key`].
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    KeyMapper::map_key(key, context)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use rstest::rstest;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    mod detail_tests {
        use super::*;

        #[rstest]
        #[case(KeyCode::Esc, AppCommand::GoBack)]
        #[case(KeyCode::Backspace, AppCommand::GoBack)]
        #[case(KeyCode::Char('b'), AppCommand::GoBack)]
        #[case(KeyCode::Left, AppCommand::PreviousImage)]
        #[case(KeyCode::Char('h'), AppCommand::PreviousImage)]
        #[case(KeyCode::Right, AppCommand::NextImage)]
        #[case(KeyCode::Char('l'), AppCommand::NextImage)]
        #[case(KeyCode::Char('1'), AppCommand::SelectImage(0))]
        #[case(KeyCode::Char('9'), AppCommand::SelectImage(8))]
        #[case(KeyCode::Char('0'), AppCommand::Noop)]
        #[case(KeyCode::Char('c'), AppCommand::CopyHash)]
        #[case(KeyCode::Char('o'), AppCommand::OpenImage)]
        #[case(KeyCode::Char('r'), AppCommand::Refresh)]
        #[case(KeyCode::Char('f'), AppCommand::OpenPlotPrompt)]
        #[case(KeyCode::Char('?'), AppCommand::ToggleHelp)]
        #[case(KeyCode::Char('q'), AppCommand::Quit)]
        #[case(KeyCode::Enter, AppCommand::Noop)]
        fn test_detail_bindings(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::Detail),
                expected
            );
        }
    }

    mod not_found_tests {
        use super::*;

        #[rstest]
        #[case(KeyCode::Enter, AppCommand::GoBack)]
        #[case(KeyCode::Esc, AppCommand::GoBack)]
        #[case(KeyCode::Char('r'), AppCommand::Refresh)]
        #[case(KeyCode::Char('f'), AppCommand::OpenPlotPrompt)]
        #[case(KeyCode::Char('q'), AppCommand::Quit)]
        #[case(KeyCode::Char('c'), AppCommand::Noop)]
        #[case(KeyCode::Right, AppCommand::Noop)]
        fn test_not_found_bindings(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::NotFound),
                expected
            );
        }
    }

    mod loading_tests {
        use super::*;

        #[rstest]
        #[case(KeyCode::Esc, AppCommand::GoBack)]
        #[case(KeyCode::Char('q'), AppCommand::Quit)]
        #[case(KeyCode::Char('r'), AppCommand::Noop)]
        #[case(KeyCode::Enter, AppCommand::Noop)]
        fn test_loading_bindings(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::Loading),
                expected
            );
        }
    }

    mod popup_tests {
        use super::*;

        #[test]
        fn test_prompt_captures_text() {
            let ctx = InputContext::OpenPlotInput;
            assert_eq!(
                map_key(key_event(KeyCode::Char('q')), &ctx),
                AppCommand::TypeChar('q')
            );
            assert_eq!(
                map_key(key_event(KeyCode::Backspace), &ctx),
                AppCommand::Backspace
            );
            assert_eq!(
                map_key(key_event(KeyCode::Enter), &ctx),
                AppCommand::SubmitPlotId
            );
            assert_eq!(map_key(key_event(KeyCode::Esc), &ctx), AppCommand::Dismiss);
        }

        #[test]
        fn test_ctrl_c() {
            assert_eq!(
                map_key(ctrl('c'), &InputContext::OpenPlotInput),
                AppCommand::Dismiss
            );
            assert_eq!(map_key(ctrl('c'), &InputContext::Detail), AppCommand::Quit);
            assert_eq!(map_key(ctrl('c'), &InputContext::Loading), AppCommand::Quit);
        }

        #[test]
        fn test_help_closes_with_question_mark() {
            assert_eq!(
                map_key(key_event(KeyCode::Char('?')), &InputContext::Help),
                AppCommand::ToggleHelp
            );
            assert_eq!(
                map_key(key_event(KeyCode::Left), &InputContext::Help),
                AppCommand::Noop
            );
        }
    }
}
