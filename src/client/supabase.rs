//! PostgREST client for the Supabase `plots` table.
//!
//! A single-row lookup is a filtered `GET` on the table endpoint:
//!
//! ```text
//! GET {base}/rest/v1/{table}?select=*&id=eq.{id}&limit=2
//! apikey: <anon key>
//! Authorization: Bearer <anon key>
//! ```
//!
//! The response body is a JSON array. Asking for two rows lets the client
//! tell "exactly one" apart from "ambiguous" without a second request.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use super::{PlotStore, http::HttpConfig, validate_plot_id};
use crate::domain::{Plot, PlotError};

/// Rows requested per lookup; one more than a match may have.
const ROW_LIMIT: &str = "2";

// ============================================================================
// Supabase Client
// ============================================================================

/// Row-store client for a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    /// Project URL, e.g. `https://abc.supabase.co`.
    base_url: String,
    /// Anonymous API key sent as `apikey` and bearer token.
    anon_key: String,
    /// Table holding plot rows.
    table: String,
    /// HTTP client for requests.
    client: Client,
}

impl SupabaseClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns `PlotError::Config` if the project URL is not a valid URL,
    /// or `PlotError::ClientInit` if the HTTP client fails to initialize.
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        table: impl Into<String>,
        http: &HttpConfig,
    ) -> Result<Self, PlotError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| PlotError::config(format!("invalid project URL '{base_url}': {e}")))?;

        Ok(Self {
            base_url,
            anon_key: anon_key.into(),
            table: table.into(),
            client: http.build_client()?,
        })
    }

    /// Builds the lookup URL for a plot id.
    ///
    /// # Errors
    ///
    /// Returns `PlotError::Config` if the table name produces an invalid URL.
    pub fn plot_url(&self, id: &str) -> Result<Url, PlotError> {
        let mut url = Url::parse(&format!("{}/rest/v1/{}", self.base_url, self.table))
            .map_err(|e| PlotError::config(format!("invalid table '{}': {e}", self.table)))?;

        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("id", &format!("eq.{id}"))
            .append_pair("limit", ROW_LIMIT);

        Ok(url)
    }

    fn build_request(&self, url: Url) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("accept", "application/json")
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Decodes a PostgREST array body into at most one plot.
    ///
    /// # Errors
    ///
    /// Returns `PlotError::Parse` for malformed rows and
    /// `PlotError::MultipleRows` when the id is ambiguous.
    pub fn parse_rows(body: &str, id: &str) -> Result<Option<Plot>, PlotError> {
        let rows: Vec<Plot> = serde_json::from_str(body)
            .map_err(|e| PlotError::parse(format!("plot row for '{id}': {e}")))?;

        let mut rows = rows.into_iter();
        match (rows.next(), rows.next()) {
            (None, _) => Ok(None),
            (Some(plot), None) => Ok(Some(plot)),
            (Some(_), Some(_)) => Err(PlotError::multiple_rows(id)),
        }
    }

    /// Maps a non-2xx response to a query error.
    ///
    /// PostgREST error bodies look like `{"code": "...", "message": "..."}`;
    /// anything else is reported verbatim.
    #[must_use]
    pub fn query_error(status: u16, body: &str) -> PlotError {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| value["message"].as_str().map(String::from))
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "Unknown error".to_string()
                } else {
                    trimmed.to_string()
                }
            });

        PlotError::query(status, message)
    }
}

#[async_trait]
impl PlotStore for SupabaseClient {
    async fn fetch_one(&self, id: &str) -> Result<Option<Plot>, PlotError> {
        let id = validate_plot_id(id)?;
        let url = self.plot_url(id)?;
        tracing::debug!(%url, "Fetching plot");

        let response = self.build_request(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::query_error(status.as_u16(), &body));
        }

        let body = response.text().await?;
        Self::parse_rows(&body, id)
    }
}

// ============================================================================
// Tests
// ============================================================================
