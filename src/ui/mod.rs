//! UI rendering for the plot detail page.
//!
//! # Module Structure
//!
//! - `panels` - Loading, not-found and detail panels
//! - `popups` - Modal overlays (open plot, help)
//! - `components` - Toast notifications
//! - `layout` - Layout calculations shared with mouse hit testing
//! - `header` - Header bar with the back link
//! - `footer` - Key hints
//! - `helpers` - Styled blocks and text rows

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, PopupState, ViewState};

use layout::calculate_app_layout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws the whole screen: page chrome, the current view state, any popup
/// and the toast on top.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = calculate_app_layout(size);

    header::render(frame, layout.header, layout.back_link, app);
    render_content(app, frame, layout.content);
    footer::render(frame, layout.footer, app);

    render_popups(app, frame, size);

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Internal Rendering Functions
// ============================================================================

fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    match app.view.state() {
        ViewState::Loading => panels::loading::render(frame, area, app.animation_tick),
        ViewState::NotFound => panels::not_found::render(frame, area),
        ViewState::Loaded(loaded) => panels::detail::render(frame, area, loaded),
    }
}

fn render_popups(app: &App, frame: &mut Frame, area: Rect) {
    match &app.ui.popup_state {
        PopupState::OpenPlot(input) => popups::render_open_plot_prompt(frame, area, input),
        PopupState::Help => popups::render_help(frame, area),
        PopupState::None => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
