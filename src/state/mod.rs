//! State management for the plotview TUI.
//!
//! The application state is decomposed into:
//!
//! - [`PlotView`] - the Loading / NotFound / Loaded machine for one plot
//! - [`Navigation`] - plots viewed earlier in the session
//! - [`UiState`] - popups and toasts
//! - [`AppConfig`] - persistent connection settings
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                      App                      │
//! ├─────────────┬──────────────┬──────────────────┤
//! │  PlotView   │  Navigation  │     UiState      │
//! │  - target   │  - history   │  - popup         │
//! │  - state    │              │  - toast         │
//! │  - ticket   │              │                  │
//! └─────────────┴──────────────┴──────────────────┘
//! ```
//!
//! Fetches run on spawned tasks and report back through an unbounded
//! channel as [`AppMessage`]s, drained by the event loop.

use std::sync::Arc;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::client::PlotStore;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod navigation;
pub mod platform;
pub mod ui_state;
pub mod view;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{AppConfig, ConfigOverrides};
pub use navigation::{BackTarget, Navigation};
pub use platform::{ClipboardBackend, ClipboardManager};
pub use ui_state::{PlotIdInput, PopupState, UiState};
pub use view::{FetchOutcome, FetchTicket, LoadedPlot, PlotView, ViewState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A fetch settled.
    PlotFetched {
        ticket: FetchTicket,
        outcome: FetchOutcome,
    },
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Sub-states
    // ========================================================================
    /// Plot currently on screen.
    pub view: PlotView,

    /// Back history.
    pub nav: Navigation,

    /// Popups and toasts.
    pub ui: UiState,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for the spinner.
    pub animation_tick: u64,

    /// Terminal area of the last draw, used for mouse hit testing.
    pub viewport: Rect,

    // ========================================================================
    // Async Communication
    // ========================================================================
    // Sends use `let _ = tx.send(...)`: the receiver only goes away on shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Collaborators
    // ========================================================================
    pub(crate) store: Arc<dyn PlotStore>,
    pub(crate) clipboard: Box<dyn ClipboardBackend>,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Construction, event loop, fetch tasks
mod app_lifecycle;

// Applying fetch outcomes
mod app_messages;

// Input context, command execution, mouse handling
mod app_commands;

// Back, open plot, clipboard, browser
mod app_actions;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
