//! Plot view state machine.
//!
//! One [`PlotView`] tracks the plot currently on screen:
//!
//! ```text
//!            ┌──────────► NotFound   (absent or failed)
//! Loading ───┤
//!            └──────────► Loaded     (record present, selected image = 0)
//! ```
//!
//! Both outcomes are terminal for a target. Retargeting (a new identifier
//! or a refresh) returns to `Loading`, resets the image selection and issues
//! a new [`FetchTicket`]. Outcomes carrying any older ticket are dropped, so
//! a slow fetch for a previous target can never overwrite the current one.

use crate::domain::Plot;

// ============================================================================
// Fetch Ticket
// ============================================================================

/// Tag attached to an in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Identifier being fetched.
    pub id: String,
    /// Monotonic counter distinguishing fetches of the same identifier.
    pub generation: u64,
}

// ============================================================================
// Fetch Outcome
// ============================================================================

/// Result of a single-row lookup, as seen by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The record exists.
    Found(Box<Plot>),
    /// Zero rows matched.
    Absent,
    /// Transport or query failure, with its message for the log.
    Failed(String),
}

// ============================================================================
// Loaded Plot
// ============================================================================

/// A loaded record plus the locally selected image.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPlot {
    plot: Plot,
    selected_image: usize,
}

impl LoadedPlot {
    /// Wrap a freshly fetched plot with the first image selected.
    #[must_use]
    pub fn new(plot: Plot) -> Self {
        Self {
            plot,
            selected_image: 0,
        }
    }

    #[must_use]
    pub fn plot(&self) -> &Plot {
        &self.plot
    }

    #[must_use]
    pub fn selected_image(&self) -> usize {
        self.selected_image
    }

    /// Reference of the primary (selected) image.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.plot.image(self.selected_image)
    }

    /// Select the image at `index`.
    ///
    /// # Returns
    ///
    /// `true` if the index was in range and the selection changed.
    pub fn select_image(&mut self, index: usize) -> bool {
        if index >= self.plot.images.len() || index == self.selected_image {
            return false;
        }
        self.selected_image = index;
        true
    }

    /// Select the next image, wrapping to the first.
    pub fn next_image(&mut self) -> bool {
        let count = self.plot.images.len();
        if count < 2 {
            return false;
        }
        self.selected_image = (self.selected_image + 1) % count;
        true
    }

    /// Select the previous image, wrapping to the last.
    pub fn previous_image(&mut self) -> bool {
        let count = self.plot.images.len();
        if count < 2 {
            return false;
        }
        self.selected_image = (self.selected_image + count - 1) % count;
        true
    }
}

// ============================================================================
// View State
// ============================================================================

/// Mutually exclusive render states.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Waiting for the fetch to settle.
    #[default]
    Loading,
    /// No record, or the fetch failed.
    NotFound,
    /// Record present.
    Loaded(LoadedPlot),
}

impl ViewState {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::NotFound => "not_found",
            Self::Loaded(_) => "loaded",
        }
    }
}

// ============================================================================
// Plot View
// ============================================================================

/// The view machine for a single plot target.
#[derive(Debug, Clone)]
pub struct PlotView {
    target: String,
    generation: u64,
    state: ViewState,
}

impl PlotView {
    /// Start a view for `id` in the `Loading` state.
    ///
    /// # Returns
    ///
    /// The view and the ticket its first fetch must carry.
    #[must_use]
    pub fn new(id: impl Into<String>) -> (Self, FetchTicket) {
        let view = Self {
            target: id.into(),
            generation: 0,
            state: ViewState::Loading,
        };
        let ticket = view.ticket();
        (view, ticket)
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Ticket of the fetch the view is currently waiting for.
    #[must_use]
    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            id: self.target.clone(),
            generation: self.generation,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// The loaded record, if any.
    #[must_use]
    pub fn loaded(&self) -> Option<&LoadedPlot> {
        match &self.state {
            ViewState::Loaded(loaded) => Some(loaded),
            _ => None,
        }
    }

    /// Mutable access to the loaded record for image selection.
    pub fn loaded_mut(&mut self) -> Option<&mut LoadedPlot> {
        match &mut self.state {
            ViewState::Loaded(loaded) => Some(loaded),
            _ => None,
        }
    }

    /// Point the view at `id` and restart from `Loading`.
    ///
    /// Any fetch issued before this call becomes stale.
    pub fn retarget(&mut self, id: impl Into<String>) -> FetchTicket {
        self.target = id.into();
        self.generation = self.generation.wrapping_add(1);
        self.state = ViewState::Loading;
        self.ticket()
    }

    /// Re-fetch the current target.
    pub fn refresh(&mut self) -> FetchTicket {
        let target = self.target.clone();
        self.retarget(target)
    }

    /// Apply a fetch outcome.
    ///
    /// Outcomes whose ticket does not match the current one, or that arrive
    /// after the view already settled, are ignored.
    ///
    /// # Returns
    ///
    /// `true` if the outcome was applied.
    pub fn apply(&mut self, ticket: &FetchTicket, outcome: FetchOutcome) -> bool {
        if *ticket != self.ticket() || !self.is_loading() {
            return false;
        }

        self.state = match outcome {
            FetchOutcome::Found(plot) => ViewState::Loaded(LoadedPlot::new(*plot)),
            FetchOutcome::Absent | FetchOutcome::Failed(_) => ViewState::NotFound,
        };
        true
    }
}

// ============================================================================
// Tests
// ============================================================================
