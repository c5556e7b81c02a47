//! Tests for the state module.

use std::sync::Arc;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use rstest::rstest;

use super::{App, AppMessage, FetchOutcome, PopupState, ViewState};
use crate::commands::{AppCommand, InputContext};
use crate::domain::Plot;
use crate::test_utils::{
    FakeStore, JsonMother, PlotMother, RecordingClipboard, app_with_store, loaded_app, loaded_app_with,
    mock_app, settle,
};
use crate::ui::layout::{calculate_app_layout, calculate_detail_layout};

// ========================================================================
// Test Helper Functions
// ========================================================================

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

fn selected_image(app: &App) -> usize {
    app.view
        .loaded()
        .map(|loaded| loaded.selected_image())
        .unwrap_or(usize::MAX)
}

// ========================================================================
// Fetch Lifecycle
// ========================================================================

#[tokio::test]
async fn test_start_loads_existing_plot() {
    let store = Arc::new(FakeStore::new().with_plot(PlotMother::scenario()));
    let (mut app, _) = app_with_store(Arc::clone(&store), "plot-42");

    assert!(app.view.is_loading());
    app.start();
    settle(&mut app).await;

    let loaded = app.view.loaded().expect("plot should be loaded");
    assert_eq!(loaded.plot().id, "plot-42");
    assert_eq!(loaded.selected_image(), 0);
    assert_eq!(store.calls(), vec!["plot-42"]);
}

#[tokio::test]
async fn test_row_with_null_columns_still_loads() {
    let plot: Plot = serde_json::from_value(JsonMother::sparse_plot_row()).unwrap();
    let store = Arc::new(FakeStore::new().with_plot(plot));
    let (mut app, _) = app_with_store(store, "plot-7");

    app.start();
    settle(&mut app).await;

    assert_eq!(app.view.state().name(), "loaded");
    assert_eq!(app.get_input_context(), InputContext::Detail);
}

#[rstest]
#[case::absent(FakeStore::new())]
#[case::query_failure(FakeStore::new().failing("plot-42", 500))]
#[tokio::test]
async fn test_absent_and_failed_fetches_show_not_found(#[case] store: FakeStore) {
    let (mut app, _) = app_with_store(Arc::new(store), "plot-42");

    app.start();
    settle(&mut app).await;

    assert_eq!(*app.view.state(), ViewState::NotFound);
    assert_eq!(app.get_input_context(), InputContext::NotFound);
}

#[tokio::test]
async fn test_blank_id_lands_on_not_found() {
    let (mut app, _) = app_with_store(Arc::new(FakeStore::new()), "   ");

    app.start();
    settle(&mut app).await;

    assert_eq!(*app.view.state(), ViewState::NotFound);
}

#[rstest]
fn test_stale_message_is_discarded(mut mock_app: App) {
    let stale = mock_app.view.ticket();
    let _current = mock_app.view.retarget("plot-43");

    mock_app.handle_message(AppMessage::PlotFetched {
        ticket: stale,
        outcome: FetchOutcome::Found(Box::new(PlotMother::scenario())),
    });

    assert!(mock_app.view.is_loading());
    assert_eq!(mock_app.view.target(), "plot-43");
}

#[tokio::test]
async fn test_refresh_refetches_same_id() {
    let store = Arc::new(FakeStore::new().with_plot(PlotMother::scenario()));
    let (mut app, _) = app_with_store(Arc::clone(&store), "plot-42");
    app.start();
    settle(&mut app).await;
    app.execute_command(AppCommand::NextImage);

    app.execute_command(AppCommand::Refresh);
    assert!(app.view.is_loading());
    settle(&mut app).await;

    assert_eq!(selected_image(&app), 0);
    assert_eq!(store.calls(), vec!["plot-42", "plot-42"]);
}

// ========================================================================
// Navigation
// ========================================================================

#[rstest]
fn test_go_back_without_history_exits(mut loaded_app: App) {
    loaded_app.execute_command(AppCommand::GoBack);
    assert!(loaded_app.exit);
}

#[tokio::test]
async fn test_open_plot_then_back_returns_to_previous() {
    let store = Arc::new(
        FakeStore::new()
            .with_plot(PlotMother::scenario())
            .with_plot(PlotMother::with_id("plot-43")),
    );
    let (mut app, _) = app_with_store(Arc::clone(&store), "plot-42");
    app.start();
    settle(&mut app).await;

    // Type "plot-43" into the prompt and submit.
    app.execute_command(AppCommand::OpenPlotPrompt);
    assert_eq!(app.get_input_context(), InputContext::OpenPlotInput);
    for c in "plot-43".chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
    app.handle_key_event(key(KeyCode::Enter));

    assert!(!app.ui.has_active_popup());
    assert_eq!(app.view.target(), "plot-43");
    settle(&mut app).await;
    assert_eq!(app.view.loaded().map(|l| l.plot().id.as_str()), Some("plot-43"));
    assert_eq!(app.nav.depth(), 1);

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.exit);
    assert_eq!(app.view.target(), "plot-42");
    settle(&mut app).await;
    assert_eq!(app.view.loaded().map(|l| l.plot().id.as_str()), Some("plot-42"));

    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.exit);
}

#[rstest]
fn test_empty_prompt_submission_keeps_prompt(mut loaded_app: App) {
    loaded_app.execute_command(AppCommand::OpenPlotPrompt);
    loaded_app.execute_command(AppCommand::TypeChar(' '));
    loaded_app.execute_command(AppCommand::SubmitPlotId);

    assert!(matches!(loaded_app.ui.popup_state, PopupState::OpenPlot(_)));
    assert_eq!(loaded_app.view.target(), "plot-42");
}

#[tokio::test]
async fn test_enter_on_not_found_goes_back() {
    let store = Arc::new(FakeStore::new().with_plot(PlotMother::scenario()));
    let (mut app, _) = app_with_store(store, "plot-42");
    app.nav.push("plot-1");
    let ticket = app.view.ticket();
    app.view.apply(&ticket, FetchOutcome::Absent);

    app.handle_key_event(key(KeyCode::Enter));

    assert!(!app.exit);
    assert_eq!(app.view.target(), "plot-1");
    assert!(app.view.is_loading());
}

// ========================================================================
// Gallery
// ========================================================================

#[rstest]
fn test_arrow_keys_cycle_images(mut loaded_app: App) {
    loaded_app.handle_key_event(key(KeyCode::Right));
    assert_eq!(selected_image(&loaded_app), 1);
    loaded_app.handle_key_event(key(KeyCode::Right));
    assert_eq!(selected_image(&loaded_app), 0);
    loaded_app.handle_key_event(key(KeyCode::Left));
    assert_eq!(selected_image(&loaded_app), 1);
}

#[rstest]
fn test_number_keys_select_thumbnails(mut loaded_app: App) {
    loaded_app.handle_key_event(key(KeyCode::Char('2')));
    assert_eq!(selected_image(&loaded_app), 1);

    // Out of range: ignored.
    loaded_app.handle_key_event(key(KeyCode::Char('5')));
    assert_eq!(selected_image(&loaded_app), 1);
}

#[rstest]
fn test_click_on_thumbnail_selects_it(mut loaded_app: App) {
    loaded_app.viewport = Rect::new(0, 0, 100, 40);
    let content = calculate_app_layout(loaded_app.viewport).content;
    let detail = calculate_detail_layout(content, 2);
    let second = detail.thumbnails[1];

    loaded_app.handle_mouse_input(left_click(second.x + 1, second.y + 1));
    assert_eq!(selected_image(&loaded_app), 1);

    // Clicking the primary image changes nothing.
    loaded_app.handle_mouse_input(left_click(detail.primary.x + 2, detail.primary.y + 2));
    assert_eq!(selected_image(&loaded_app), 1);
}

#[rstest]
fn test_click_on_back_link_goes_back(mut loaded_app: App) {
    loaded_app.viewport = Rect::new(0, 0, 100, 40);
    let back = calculate_app_layout(loaded_app.viewport).back_link;

    loaded_app.handle_mouse_input(left_click(back.x + 2, back.y));
    assert!(loaded_app.exit);
}

#[rstest]
fn test_clicks_are_ignored_under_popups(mut loaded_app: App) {
    loaded_app.viewport = Rect::new(0, 0, 100, 40);
    loaded_app.execute_command(AppCommand::ToggleHelp);
    let back = calculate_app_layout(loaded_app.viewport).back_link;

    loaded_app.handle_mouse_input(left_click(back.x, back.y));
    assert!(!loaded_app.exit);
}

// ========================================================================
// Clipboard & Popups
// ========================================================================

#[test]
fn test_copy_hash_copies_full_hash() {
    let store = Arc::new(FakeStore::new());
    let clipboard = RecordingClipboard::new();
    let mut app = App::with_clipboard(
        store,
        "plot-42",
        Box::new(clipboard.clone()),
    );
    let ticket = app.view.ticket();
    app.view.apply(
        &ticket,
        FetchOutcome::Found(Box::new(PlotMother::scenario())),
    );

    app.handle_key_event(key(KeyCode::Char('c')));

    assert_eq!(clipboard.copies(), vec!["0x9f3a1c2b7d4e5f60718293a4b5c6d7e8"]);
    assert_eq!(
        app.ui.toast.as_ref().map(|(msg, _)| msg.as_str()),
        Some("[+] Blockchain hash copied!")
    );
}

#[test]
fn test_copy_hash_reports_clipboard_failure() {
    let mut app = App::with_clipboard(
        Arc::new(FakeStore::new()),
        "plot-42",
        Box::new(RecordingClipboard::unavailable()),
    );
    let ticket = app.view.ticket();
    app.view.apply(
        &ticket,
        FetchOutcome::Found(Box::new(PlotMother::scenario())),
    );

    app.execute_command(AppCommand::CopyHash);

    assert_eq!(
        app.ui.toast.as_ref().map(|(msg, _)| msg.as_str()),
        Some("[x] Clipboard not available")
    );
    // Failures never open a blocking popup.
    assert_eq!(app.ui.popup_state, PopupState::None);
    assert_eq!(app.get_input_context(), InputContext::Detail);
}

#[test]
fn test_copy_hash_without_hash() {
    let mut app = loaded_app_with(crate::domain::Plot {
        blockchain_hash: None,
        ..PlotMother::scenario()
    });

    app.execute_command(AppCommand::CopyHash);

    assert_eq!(
        app.ui.toast.as_ref().map(|(msg, _)| msg.as_str()),
        Some("[x] No blockchain hash for this plot")
    );
}

#[test]
fn test_open_image_without_images() {
    let mut app = loaded_app_with(PlotMother::with_images(&[]));

    app.execute_command(AppCommand::OpenImage);

    assert_eq!(
        app.ui.toast.as_ref().map(|(msg, _)| msg.as_str()),
        Some("[x] No image to open")
    );
}

#[rstest]
fn test_help_context_takes_precedence(mut loaded_app: App) {
    assert_eq!(loaded_app.get_input_context(), InputContext::Detail);

    loaded_app.handle_key_event(key(KeyCode::Char('?')));
    assert_eq!(loaded_app.get_input_context(), InputContext::Help);

    // Page keys are inert while help is open.
    loaded_app.handle_key_event(key(KeyCode::Right));
    assert_eq!(selected_image(&loaded_app), 0);

    loaded_app.handle_key_event(key(KeyCode::Esc));
    assert_eq!(loaded_app.get_input_context(), InputContext::Detail);
    assert!(!loaded_app.exit);
}

#[rstest]
fn test_loading_context_ignores_refresh(mut mock_app: App) {
    assert_eq!(mock_app.get_input_context(), InputContext::Loading);
    mock_app.handle_key_event(key(KeyCode::Char('r')));
    assert!(mock_app.view.is_loading());
}

#[rstest]
fn test_tick_advances_animation_and_toast(mut mock_app: App) {
    mock_app.ui.show_toast("hi", 1);
    mock_app.on_tick();

    assert_eq!(mock_app.animation_tick, 1);
    assert!(mock_app.ui.toast.is_none());
}
