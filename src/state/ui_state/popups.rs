//! Popup state types for the plotview TUI.
//!
//! - Open-plot prompt with its text input
//! - Help overlay

// ============================================================================
// Open Plot Input
// ============================================================================

/// Text input of the "open plot by id" prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlotIdInput {
    value: String,
}

impl PlotIdInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Append a character; control characters are ignored.
    pub fn push(&mut self, c: char) {
        if !c.is_control() {
            self.value.push(c);
        }
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Trimmed identifier, if anything was typed.
    #[must_use]
    pub fn submission(&self) -> Option<&str> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

// ============================================================================
// Popup State
// ============================================================================

/// The modal overlay currently shown, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup.
    #[default]
    None,
    /// Prompt for another plot identifier.
    OpenPlot(PlotIdInput),
    /// Key binding help.
    Help,
}

impl PopupState {
    /// Returns `true` if any popup is shown.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}
