//! Message processing for the plotview application.

use super::{App, AppMessage};

impl App {
    /// Drains every pending message without blocking.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PlotFetched { ticket, outcome } => {
                if self.view.apply(&ticket, outcome) {
                    tracing::info!(
                        id = %ticket.id,
                        state = self.view.state().name(),
                        "Plot view settled"
                    );
                } else {
                    tracing::debug!(
                        id = %ticket.id,
                        generation = ticket.generation,
                        "Discarding stale fetch outcome"
                    );
                }
            }
        }
    }
}
