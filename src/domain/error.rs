//! Error types for plot lookups.
//!
//! This module defines the structured error type used by the row-store client
//! and configuration validation. The view layer never shows these to the user
//! directly: any failure lands on the "Plot Not Found" screen and is logged.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for plot row-store operations.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The row-store rejected the query (non-2xx response).
    #[error("Query failed with HTTP {status}: {message}")]
    Query {
        /// HTTP status code returned by the row-store.
        status: u16,
        /// Error message reported by the row-store, or the raw body.
        message: String,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// A single-row lookup matched more than one row.
    #[error("More than one plot matches id '{id}'")]
    MultipleRows {
        /// The identifier that was looked up.
        id: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlotError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new query error from an HTTP status and message.
    #[must_use]
    pub fn query(status: u16, message: impl Into<String>) -> Self {
        Self::Query {
            status,
            message: message.into(),
        }
    }

    /// Create a new multiple rows error.
    #[must_use]
    pub fn multiple_rows(id: impl Into<String>) -> Self {
        Self::MultipleRows { id: id.into() }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Create a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Convert to a `color_eyre::Report` for the application plumbing.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
