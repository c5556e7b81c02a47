//! User actions: back navigation, opening plots, clipboard and browser.

use super::{App, BackTarget};
use crate::client::validate_plot_id;
use crate::constants::{ERROR_TOAST_TICKS, TOAST_TICKS};

impl App {
    // ========================================================================
    // Navigation
    // ========================================================================

    /// Return to the previous plot, or leave when there is none.
    pub(crate) fn go_back(&mut self) {
        self.ui.dismiss_popup();
        match self.nav.go_back() {
            BackTarget::Previous(id) => {
                tracing::info!(id = %id, remaining = self.nav.depth(), "Going back");
                let ticket = self.view.retarget(id);
                self.spawn_fetch(ticket);
            }
            BackTarget::Exit => {
                self.exit = true;
            }
        }
    }

    /// Show another plot, remembering the current one for back navigation.
    pub(crate) fn open_plot(&mut self, id: &str) {
        let id = match validate_plot_id(id) {
            Ok(id) => id.to_string(),
            Err(e) => {
                self.ui.show_toast(format!("[x] {e}"), ERROR_TOAST_TICKS);
                return;
            }
        };

        if id == self.view.target() {
            self.refresh();
            return;
        }

        tracing::info!(from = self.view.target(), to = %id, "Opening plot");
        self.nav.push(self.view.target().to_string());
        let ticket = self.view.retarget(id);
        self.spawn_fetch(ticket);
    }

    /// Fetch the current plot again.
    pub(crate) fn refresh(&mut self) {
        let ticket = self.view.refresh();
        tracing::info!(id = %ticket.id, generation = ticket.generation, "Refreshing plot");
        self.spawn_fetch(ticket);
    }

    /// Submit the "open plot" prompt.
    pub(crate) fn submit_plot_prompt(&mut self) {
        let Some(id) = self
            .ui
            .plot_input_mut()
            .and_then(|input| input.submission().map(str::to_string))
        else {
            return;
        };
        self.ui.dismiss_popup();
        self.open_plot(&id);
    }

    // ========================================================================
    // Clipboard & Browser
    // ========================================================================

    /// Copy the full blockchain hash of the loaded plot.
    pub(crate) fn copy_hash_to_clipboard(&mut self) {
        let Some(hash) = self
            .view
            .loaded()
            .and_then(|loaded| loaded.plot().blockchain_hash())
            .map(str::to_string)
        else {
            self.ui
                .show_toast("[x] No blockchain hash for this plot", TOAST_TICKS);
            return;
        };

        match self.clipboard.copy_text(&hash) {
            Ok(()) => {
                self.ui.show_toast("[+] Blockchain hash copied!", TOAST_TICKS);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard copy failed");
                self.ui.show_toast(format!("[x] {e}"), ERROR_TOAST_TICKS);
            }
        }
    }

    /// Open the selected image reference with the system handler.
    pub(crate) fn open_selected_image(&mut self) {
        let Some(reference) = self
            .view
            .loaded()
            .and_then(|loaded| loaded.primary_image())
            .map(str::to_string)
        else {
            self.ui.show_toast("[x] No image to open", TOAST_TICKS);
            return;
        };

        match open::that(&reference) {
            Ok(()) => {
                self.ui.show_toast("[+] Opened in browser", TOAST_TICKS);
            }
            Err(e) => {
                tracing::warn!(error = %e, reference = %reference, "Failed to open image");
                self.ui
                    .show_toast(format!("[x] Failed to open browser: {e}"), ERROR_TOAST_TICKS);
            }
        }
    }
}
