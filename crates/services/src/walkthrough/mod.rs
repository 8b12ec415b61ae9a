mod engine;
mod progress;
mod review;

// Public API of the walkthrough subsystem.
pub use crate::error::WalkthroughError;
pub use engine::{Phase, Walkthrough};
pub use progress::WalkthroughProgress;
pub use review::{QuizReview, QuizReviewItem};
