//! Shared test utilities and Mother pattern factories.
//!
//! Reusable fixtures so tests do not copy-paste setup code: plot records,
//! raw PostgREST rows, an in-memory store, a recording clipboard and a
//! ready-made [`App`].
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::client::{PlotStore, validate_plot_id};
use crate::domain::{Plot, PlotError, VerificationStatus};
use crate::state::platform::clipboard::{ClipboardError, ClipboardResult};
use crate::state::{App, ClipboardBackend};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct PlotMother;

impl PlotMother {
    /// The reference listing: two images, pending verification, 25 lakh.
    #[must_use]
    pub fn scenario() -> Plot {
        Plot {
            id: "plot-42".to_string(),
            title: "Corner Plot near Ring Road".to_string(),
            description: Some("East-facing corner plot with clear title.".to_string()),
            location_address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            price: 2_500_000.0,
            price_per_sqft: 1200.0,
            area_sqft: 2083.0,
            length_ft: Some(50.0),
            width_ft: Some(41.66),
            images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            owner_name: "Asha Kulkarni".to_string(),
            property_owner_name: "Asha Kulkarni".to_string(),
            verification_status: VerificationStatus::PendingVerification,
            status: "available".to_string(),
            owner_verified: true,
            created_at: "2024-03-15T10:20:30.123456+00:00".to_string(),
            blockchain_hash: Some("0x9f3a1c2b7d4e5f60718293a4b5c6d7e8".to_string()),
        }
    }

    #[must_use]
    pub fn with_id(id: &str) -> Plot {
        Plot {
            id: id.to_string(),
            ..Self::scenario()
        }
    }

    #[must_use]
    pub fn with_images(images: &[&str]) -> Plot {
        Plot {
            images: images.iter().map(|s| (*s).to_string()).collect(),
            ..Self::scenario()
        }
    }

    #[must_use]
    pub fn with_status(status: VerificationStatus) -> Plot {
        Plot {
            verification_status: status,
            ..Self::scenario()
        }
    }
}

/// Raw rows as PostgREST returns them.
pub struct JsonMother;

impl JsonMother {
    #[must_use]
    pub fn plot_row() -> serde_json::Value {
        serde_json::json!({
            "id": "plot-42",
            "title": "Corner Plot near Ring Road",
            "description": "East-facing corner plot with clear title.",
            "location_address": "12 MG Road",
            "city": "Pune",
            "state": "Maharashtra",
            "price": 2_500_000,
            "price_per_sqft": 1200,
            "area_sqft": 2083,
            "length_ft": 50,
            "width_ft": 41.66,
            "images": ["a.jpg", "b.jpg"],
            "owner_name": "Asha Kulkarni",
            "property_owner_name": "Asha Kulkarni",
            "verification_status": "pending_verification",
            "status": "available",
            "owner_verified": true,
            "created_at": "2024-03-15T10:20:30.123456+00:00",
            "blockchain_hash": "0x9f3a1c2b7d4e5f60718293a4b5c6d7e8"
        })
    }

    /// A row with every nullable column `null` and the optional numbers missing.
    #[must_use]
    pub fn sparse_plot_row() -> serde_json::Value {
        serde_json::json!({
            "id": "plot-7",
            "title": null,
            "description": null,
            "location_address": "Survey 88",
            "city": "Nashik",
            "state": "Maharashtra",
            "price": 450_000,
            "price_per_sqft": 90,
            "area_sqft": 5000,
            "images": null,
            "owner_name": null,
            "property_owner_name": null,
            "verification_status": null,
            "status": null,
            "owner_verified": null,
            "created_at": null,
            "blockchain_hash": null
        })
    }
}

// ============================================================================
// Fakes
// ============================================================================

/// In-memory [`PlotStore`] keyed by id.
#[derive(Debug, Default)]
pub struct FakeStore {
    plots: HashMap<String, Plot>,
    failing: HashMap<String, u16>,
    calls: Mutex<Vec<String>>,
}

impl FakeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_plot(mut self, plot: Plot) -> Self {
        self.plots.insert(plot.id.clone(), plot);
        self
    }

    /// Make lookups of `id` fail with an HTTP status.
    #[must_use]
    pub fn failing(mut self, id: &str, status: u16) -> Self {
        self.failing.insert(id.to_string(), status);
        self
    }

    /// Identifiers looked up so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PlotStore for FakeStore {
    async fn fetch_one(&self, id: &str) -> Result<Option<Plot>, PlotError> {
        let id = validate_plot_id(id)?;
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(id.to_string());
        }
        if let Some(status) = self.failing.get(id) {
            return Err(PlotError::query(*status, "simulated failure"));
        }
        Ok(self.plots.get(id).cloned())
    }
}

/// Clipboard that records copies instead of touching the system.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    copies: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every copy fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn copies(&self) -> Vec<String> {
        self.copies.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl ClipboardBackend for RecordingClipboard {
    fn copy_text(&mut self, text: &str) -> ClipboardResult<()> {
        if self.fail {
            return Err(ClipboardError::NotAvailable);
        }
        if let Ok(mut copies) = self.copies.lock() {
            copies.push(text.to_string());
        }
        Ok(())
    }
}

// ============================================================================
// App Builders
// ============================================================================

/// App for `plot_id` backed by `store`, with a recording clipboard.
#[must_use]
pub fn app_with_store(store: Arc<FakeStore>, plot_id: &str) -> (App, RecordingClipboard) {
    let clipboard = RecordingClipboard::new();
    let app = App::with_clipboard(store, plot_id, Box::new(clipboard.clone()));
    (app, clipboard)
}

/// Deliver the next fetch outcome to the app.
pub async fn settle(app: &mut App) {
    if let Some(message) = app.message_rx.recv().await {
        app.handle_message(message);
    }
}

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

/// App still loading the scenario plot; no fetch issued.
#[fixture]
pub fn mock_app() -> App {
    let store = Arc::new(FakeStore::new().with_plot(PlotMother::scenario()));
    app_with_store(store, "plot-42").0
}

/// App with the scenario plot already loaded, no task spawned.
#[fixture]
pub fn loaded_app() -> App {
    loaded_app_with(PlotMother::scenario())
}

#[must_use]
pub fn loaded_app_with(plot: Plot) -> App {
    let store = Arc::new(FakeStore::new().with_plot(plot.clone()));
    let (mut app, _) = app_with_store(store, &plot.id);
    let ticket = app.view.ticket();
    app.view
        .apply(&ticket, crate::state::FetchOutcome::Found(Box::new(plot)));
    app
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Flatten a buffer into newline-separated rows of cell symbols.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            result.push('\n');
        }
    }
    result
}
