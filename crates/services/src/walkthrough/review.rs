/// Per-question correctness shown after a quiz submission.
///
/// Grading is informational only: it never gates continuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReview {
    pub items: Vec<QuizReviewItem>,
    pub all_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReviewItem {
    pub question: String,
    pub expected: bool,
    pub given: bool,
    pub correct: bool,
}
