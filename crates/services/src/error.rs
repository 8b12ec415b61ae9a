//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by [`crate::walkthrough::Walkthrough`] transitions.
///
/// A transition error means the call was refused and state is unchanged;
/// callers are expected not to offer the affected control in the first place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WalkthroughError {
    #[error("cheat sheet has no sections")]
    Empty,
    #[error("already on the last section")]
    AtLastSection,
    #[error("already on the first section")]
    AtFirstSection,
    #[error("a quiz is open; finish or skip it first")]
    QuizOpen,
    #[error("no quiz is open")]
    NoQuizOpen,
    #[error("quiz already submitted")]
    AlreadySubmitted,
    #[error("quiz incomplete: {answered} of {total} questions answered")]
    QuizIncomplete { answered: usize, total: usize },
    #[error("quiz question index {index} is out of range")]
    QuestionOutOfRange { index: usize },
    #[error("restart is only available at the end of the sheet")]
    NotAtEnd,
}

/// Errors emitted by a [`crate::loader::SheetFetcher`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("cheat sheet not found: {name}")]
    NotFound { name: String },
    #[error("fetch failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Errors emitted by [`crate::loader::SheetLoader`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("document failed validation with {} error(s)", .errors.len())]
    Invalid { errors: Vec<String> },
    #[error("manifest is not valid JSON: {0}")]
    ManifestFormat(#[from] serde_json::Error),
}

/// Errors emitted while generating a manifest from a directory.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ManifestError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
