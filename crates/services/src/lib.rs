#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod manifest;
pub mod walkthrough;

pub use error::{FetchError, LoadError, ManifestError, WalkthroughError};
pub use loader::{HttpSheetFetcher, LoadOutcome, LoadedSheet, SheetFetcher, SheetLoader};
pub use manifest::{generate_manifest, write_manifest};
pub use walkthrough::{Phase, QuizReview, QuizReviewItem, Walkthrough, WalkthroughProgress};
