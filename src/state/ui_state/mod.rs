//! UI presentation state: popups and toast notifications.
//!
//! # Example
//!
//! ```ignore
//! use crate::state::UiState;
//!
//! let mut ui = UiState::new();
//! ui.show_toast("Copied!", 20);
//! ui.open_plot_prompt();
//! ```

pub mod popups;

pub use popups::{PlotIdInput, PopupState};

// ============================================================================
// UiState
// ============================================================================

/// Presentation concerns that are independent of the loaded plot.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Current popup, if any.
    pub popup_state: PopupState,
    /// Toast message and its remaining ticks.
    pub toast: Option<(String, u8)>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    /// Returns `true` if a popup is active.
    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    /// Dismisses the current popup.
    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Opens the "open plot by id" prompt with an empty input.
    pub fn open_plot_prompt(&mut self) {
        self.popup_state = PopupState::OpenPlot(PlotIdInput::new());
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self) {
        self.popup_state = match self.popup_state {
            PopupState::Help => PopupState::None,
            _ => PopupState::Help,
        };
    }

    /// Mutable access to the prompt input while it is open.
    pub fn plot_input_mut(&mut self) -> Option<&mut PlotIdInput> {
        match &mut self.popup_state {
            PopupState::OpenPlot(input) => Some(input),
            _ => None,
        }
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification; duration is in ticks (~100ms each).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        let Some((_, ref mut ticks)) = self.toast else {
            return false;
        };

        if *ticks > 1 {
            *ticks -= 1;
            false
        } else {
            self.toast = None;
            true
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut ui = UiState::new();
        assert!(ui.toast.is_none());

        ui.show_toast("Hello", 2);
        assert_eq!(ui.toast.as_ref().map(|(msg, _)| msg.as_str()), Some("Hello"));

        assert!(!ui.tick_toast()); // 2 -> 1
        assert!(ui.tick_toast()); // 1 -> removed
        assert!(ui.toast.is_none());
        assert!(!ui.tick_toast());
    }

    #[test]
    fn test_popup_transitions() {
        let mut ui = UiState::new();
        assert!(!ui.has_active_popup());

        ui.open_plot_prompt();
        assert!(ui.plot_input_mut().is_some());

        ui.toggle_help();
        assert_eq!(ui.popup_state, PopupState::Help);
        assert!(ui.plot_input_mut().is_none());

        ui.toggle_help();
        assert!(!ui.has_active_popup());

        ui.open_plot_prompt();
        ui.dismiss_popup();
        assert!(!ui.has_active_popup());
    }
}
