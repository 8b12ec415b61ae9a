//! Fetching and validating cheat sheets by name.
//!
//! Fetching is the one asynchronous boundary of the system: everything after
//! the response arrives (parse, validate, walkthrough construction) is
//! synchronous. The loader also guards against stale results — when a new
//! load starts while an older one is in flight, the older result is
//! discarded instead of being applied.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use sheet_core::{CheatSheet, Manifest, validate_text};

use crate::error::{FetchError, LoadError};

/// Source of raw cheat-sheet JSON, keyed by document name.
#[async_trait]
pub trait SheetFetcher: Send + Sync {
    /// Fetch the raw text of `<name>.json`.
    async fn fetch(&self, name: &str) -> Result<String, FetchError>;
}

/// Fetches documents over HTTP from `{base_url}/{name}.json`.
pub struct HttpSheetFetcher {
    client: Client,
    base_url: String,
}

impl HttpSheetFetcher {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SheetFetcher for HttpSheetFetcher {
    async fn fetch(&self, name: &str) -> Result<String, FetchError> {
        let url = format!("{}/{name}.json", self.base_url.trim_end_matches('/'));
        debug!(%url, "fetching cheat sheet");
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                name: name.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response.text().await?)
    }
}

/// A successfully loaded, renderable sheet plus its advisory warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSheet {
    pub sheet: CheatSheet,
    pub warnings: Vec<String>,
}

/// Result of a completed load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(LoadedSheet),
    /// A newer load started while this one was in flight; the result was
    /// discarded and must not be applied.
    Superseded,
}

/// Loads cheat sheets through a [`SheetFetcher`] and validates them.
pub struct SheetLoader {
    fetcher: Arc<dyn SheetFetcher>,
    generation: AtomicU64,
}

impl SheetLoader {
    #[must_use]
    pub fn new(fetcher: Arc<dyn SheetFetcher>) -> Self {
        Self {
            fetcher,
            generation: AtomicU64::new(0),
        }
    }

    /// Fetch and validate the named sheet.
    ///
    /// Errors (not found, transport, invalid document) are also subject to
    /// the stale guard: an outdated failure is reported as `Superseded`
    /// rather than surfaced to the user.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Fetch` when the fetch fails and
    /// `LoadError::Invalid` when the document is not renderable.
    pub async fn load(&self, name: &str) -> Result<LoadOutcome, LoadError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.fetch_and_validate(name).await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(name, "discarding stale load result");
            return Ok(LoadOutcome::Superseded);
        }
        result.map(LoadOutcome::Loaded)
    }

    /// Fetch and parse the server's document index.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Fetch` when the fetch fails and
    /// `LoadError::ManifestFormat` when the body is not a manifest.
    pub async fn load_manifest(&self) -> Result<Manifest, LoadError> {
        let text = self.fetcher.fetch("manifest").await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn fetch_and_validate(&self, name: &str) -> Result<LoadedSheet, LoadError> {
        let text = self.fetcher.fetch(name).await?;
        let report = validate_text(&text);
        let warnings = report.warnings().to_vec();
        let errors = report.errors().to_vec();
        match report.into_data() {
            Some(sheet) => {
                info!(name, sections = sheet.section_count(), "cheat sheet loaded");
                Ok(LoadedSheet { sheet, warnings })
            }
            None => Err(LoadError::Invalid { errors }),
        }
    }
}
