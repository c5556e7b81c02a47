//! Back navigation between plots opened in this session.
//!
//! The first plot comes from the command line. Opening another plot from
//! the prompt pushes the current one onto the history; going back pops it.
//! With nothing left to return to, going back leaves the application.

// ============================================================================
// Back Target
// ============================================================================

/// Where a back action leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackTarget {
    /// Show this previously viewed plot again.
    Previous(String),
    /// Nothing to return to; leave the viewer.
    Exit,
}

// ============================================================================
// Navigation
// ============================================================================

/// History of plot identifiers viewed before the current one.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    history: Vec<String>,
}

impl Navigation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `current` before moving to another plot.
    ///
    /// Consecutive duplicates are collapsed.
    pub fn push(&mut self, current: impl Into<String>) {
        let current = current.into();
        if self.history.last() != Some(&current) {
            self.history.push(current);
        }
    }

    /// Resolve a back action.
    pub fn go_back(&mut self) -> BackTarget {
        match self.history.pop() {
            Some(previous) => BackTarget::Previous(previous),
            None => BackTarget::Exit,
        }
    }

    /// Plots waiting behind the current one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}
