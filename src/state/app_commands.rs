//! Command execution and input handling.
//!
//! Keyboard input is mapped to commands by [`crate::commands::KeyMapper`];
//! mouse clicks are hit-tested against the same layout the renderer uses.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::{App, PopupState, ViewState};
use crate::commands::{AppCommand, InputContext, map_key};
use crate::ui::layout::{calculate_app_layout, calculate_detail_layout};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines which key bindings are active.
    ///
    /// Popups take precedence over the page underneath.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match &self.ui.popup_state {
            PopupState::Help => InputContext::Help,
            PopupState::OpenPlot(_) => InputContext::OpenPlotInput,
            PopupState::None => match self.view.state() {
                ViewState::Loading => InputContext::Loading,
                ViewState::NotFound => InputContext::NotFound,
                ViewState::Loaded(_) => InputContext::Detail,
            },
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::GoBack => {
                self.go_back();
            }
            AppCommand::Refresh => {
                self.refresh();
            }
            AppCommand::ToggleHelp => {
                self.ui.toggle_help();
            }

            // === Popup Control ===
            AppCommand::OpenPlotPrompt => {
                self.ui.open_plot_prompt();
            }
            AppCommand::Dismiss => {
                self.ui.dismiss_popup();
            }

            // === Gallery ===
            AppCommand::PreviousImage => {
                if let Some(loaded) = self.view.loaded_mut() {
                    loaded.previous_image();
                }
            }
            AppCommand::NextImage => {
                if let Some(loaded) = self.view.loaded_mut() {
                    loaded.next_image();
                }
            }
            AppCommand::SelectImage(index) => {
                if let Some(loaded) = self.view.loaded_mut() {
                    loaded.select_image(index);
                }
            }

            // === Detail Actions ===
            AppCommand::CopyHash => {
                self.copy_hash_to_clipboard();
            }
            AppCommand::OpenImage => {
                self.open_selected_image();
            }

            // === Text Input ===
            AppCommand::TypeChar(c) => {
                if let Some(input) = self.ui.plot_input_mut() {
                    input.push(c);
                }
            }
            AppCommand::Backspace => {
                if let Some(input) = self.ui.plot_input_mut() {
                    input.backspace();
                }
            }
            AppCommand::SubmitPlotId => {
                self.submit_plot_prompt();
            }

            // === No Operation ===
            AppCommand::Noop => {}
        }
    }

    /// Handles mouse clicks on the back link and thumbnails.
    pub(crate) fn handle_mouse_input(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || self.ui.has_active_popup() {
            return;
        }

        let layout = calculate_app_layout(self.viewport);
        if layout
            .back_link
            .contains(Position::new(mouse.column, mouse.row))
        {
            self.go_back();
            return;
        }

        let Some(loaded) = self.view.loaded_mut() else {
            return;
        };
        let detail = calculate_detail_layout(layout.content, loaded.plot().images.len());
        if let Some(index) = detail.thumbnail_at(mouse.column, mouse.row) {
            loaded.select_image(index);
        }
    }
}
