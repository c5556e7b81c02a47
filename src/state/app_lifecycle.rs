//! Application lifecycle management.
//!
//! - `new()` - builds the application for an initial plot id
//! - `run()` - main event loop
//! - `spawn_fetch()` - background row lookup for one ticket

use std::sync::Arc;
use std::time::Instant;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::client::PlotStore;
use crate::constants::TICK_RATE;
use crate::tui::Tui;
use crate::ui;

use super::{
    App, AppMessage, ClipboardBackend, ClipboardManager, FetchOutcome, FetchTicket,
    Navigation, PlotView, UiState,
};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates the application showing `plot_id` in the `Loading` state.
    ///
    /// No fetch is issued until [`App::run`] (or [`App::start`]) is called.
    #[must_use]
    pub fn new(store: Arc<dyn PlotStore>, plot_id: impl Into<String>) -> Self {
        Self::with_clipboard(store, plot_id, Box::new(ClipboardManager::new()))
    }

    /// Like [`App::new`] with an explicit clipboard backend.
    #[must_use]
    pub fn with_clipboard(
        store: Arc<dyn PlotStore>,
        plot_id: impl Into<String>,
        clipboard: Box<dyn ClipboardBackend>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (view, _) = PlotView::new(plot_id);

        Self {
            view,
            nav: Navigation::new(),
            ui: UiState::new(),
            exit: false,
            animation_tick: 0,
            viewport: Rect::default(),
            message_tx,
            message_rx,
            store,
            clipboard,
        }
    }

    /// Issues the fetch for the current target.
    pub fn start(&self) {
        tracing::info!(id = self.view.target(), "Opening plot");
        self.spawn_fetch(self.view.ticket());
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start();
        self.draw(terminal)?;

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_input(mouse);
                    }
                    Event::Resize(_, _) => {
                        self.draw(terminal)?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.on_tick();
                self.draw(terminal)?;
                last_tick = Instant::now();
            }
        }

        tracing::info!("Exiting");
        Ok(())
    }

    /// Advances animations and timed messages by one tick.
    pub(crate) fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        self.ui.tick_toast();
    }

    fn draw(&mut self, terminal: &mut Tui) -> Result<()> {
        let completed = terminal.draw(|frame| ui::render(self, frame))?;
        self.viewport = completed.area;
        Ok(())
    }

    // ========================================================================
    // Background Fetch
    // ========================================================================

    /// Looks up `ticket.id` on a background task.
    ///
    /// The outcome always comes back tagged with `ticket`; the view decides
    /// whether it is still wanted.
    pub(crate) fn spawn_fetch(&self, ticket: FetchTicket) {
        let store = Arc::clone(&self.store);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let outcome = fetch_outcome(store.as_ref(), &ticket.id).await;
            let _ = message_tx.send(AppMessage::PlotFetched { ticket, outcome });
        });
    }
}

/// Runs one lookup and folds its result into a [`FetchOutcome`].
pub(crate) async fn fetch_outcome(store: &dyn PlotStore, id: &str) -> FetchOutcome {
    match store.fetch_one(id).await {
        Ok(Some(plot)) => FetchOutcome::Found(Box::new(plot)),
        Ok(None) => {
            tracing::info!(id, "No plot with this id");
            FetchOutcome::Absent
        }
        Err(err) => {
            tracing::error!(id, error = %err, "Error fetching plot details");
            FetchOutcome::Failed(err.to_string())
        }
    }
}
