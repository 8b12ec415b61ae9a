use std::collections::{BTreeMap, BTreeSet};
use std::mem;

use sheet_core::{CheatSheet, Section};

use super::progress::WalkthroughProgress;
use super::review::{QuizReview, QuizReviewItem};
use crate::error::WalkthroughError;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where the viewer stands relative to the active section's gating quiz.
///
/// The quiz answer map lives inside the variant, so "submitted but no quiz
/// open" and similar contradictions cannot be expressed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Flipping cards; no quiz visible.
    Browsing,
    /// Quiz visible, answers accumulating, not yet submitted.
    Quizzing { answers: BTreeMap<usize, bool> },
    /// Quiz submitted; correctness shown, continuation unlocked.
    Reviewing { answers: BTreeMap<usize, bool> },
}

//
// ─── WALKTHROUGH ───────────────────────────────────────────────────────────────
//

/// In-memory walkthrough of a renderable cheat sheet.
///
/// Steps through sections linearly, gating each advance on the section's
/// quiz. All transitions are synchronous and atomic; a refused transition
/// returns an error and leaves state untouched. One walkthrough exists per
/// loaded sheet and is discarded when a new sheet loads.
pub struct Walkthrough {
    sheet: CheatSheet,
    current: usize,
    flipped: BTreeSet<(usize, usize)>,
    phase: Phase,
}

impl Walkthrough {
    /// Create a walkthrough positioned at the first section.
    ///
    /// # Errors
    ///
    /// Returns `WalkthroughError::Empty` if the sheet has no sections.
    pub fn new(sheet: CheatSheet) -> Result<Self, WalkthroughError> {
        if sheet.sections.is_empty() {
            return Err(WalkthroughError::Empty);
        }
        Ok(Self {
            sheet,
            current: 0,
            flipped: BTreeSet::new(),
            phase: Phase::Browsing,
        })
    }

    #[must_use]
    pub fn sheet(&self) -> &CheatSheet {
        &self.sheet
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_section(&self) -> &Section {
        &self.sheet.sections[self.current]
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn quiz_visible(&self) -> bool {
        !matches!(self.phase, Phase::Browsing)
    }

    #[must_use]
    pub fn quiz_submitted(&self) -> bool {
        matches!(self.phase, Phase::Reviewing { .. })
    }

    #[must_use]
    pub fn is_flipped(&self, section: usize, card: usize) -> bool {
        self.flipped.contains(&(section, card))
    }

    /// True while the last section is being browsed; only restart remains.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.current == self.sheet.sections.len() - 1 && matches!(self.phase, Phase::Browsing)
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        matches!(self.phase, Phase::Browsing) && self.current < self.sheet.sections.len() - 1
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        match &self.phase {
            Phase::Quizzing { answers } => answers.len() == self.current_section().quiz.len(),
            _ => false,
        }
    }

    /// Number of quiz questions answered so far in the open quiz.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        match &self.phase {
            Phase::Browsing => 0,
            Phase::Quizzing { answers } | Phase::Reviewing { answers } => answers.len(),
        }
    }

    /// Returns a summary of the current walkthrough progress.
    #[must_use]
    pub fn progress(&self) -> WalkthroughProgress {
        WalkthroughProgress {
            section: self.current,
            total_sections: self.sheet.sections.len(),
            flipped_in_section: self
                .flipped
                .iter()
                .filter(|(section, _)| *section == self.current)
                .count(),
            quiz_visible: self.quiz_visible(),
            quiz_submitted: self.quiz_submitted(),
            at_end: self.at_end(),
        }
    }

    /// Per-question grading of the submitted quiz, available while reviewing.
    #[must_use]
    pub fn review(&self) -> Option<QuizReview> {
        let Phase::Reviewing { answers } = &self.phase else {
            return None;
        };
        // Submission requires a complete answer map, so quiz items and
        // answer values line up one to one.
        let items: Vec<QuizReviewItem> = self
            .current_section()
            .quiz
            .iter()
            .zip(answers.values())
            .map(|(item, &given)| QuizReviewItem {
                question: item.question.clone(),
                expected: item.answer,
                given,
                correct: given == item.answer,
            })
            .collect();
        let all_correct = items.iter().all(|item| item.correct);
        Some(QuizReview { items, all_correct })
    }

    /// Toggle a card of the displayed section between face-up and face-down.
    ///
    /// Out-of-range indices are a caller bug, not a runtime condition.
    ///
    /// # Errors
    ///
    /// Returns `WalkthroughError::QuizOpen` while a quiz is visible.
    pub fn flip_card(&mut self, section: usize, card: usize) -> Result<(), WalkthroughError> {
        if !matches!(self.phase, Phase::Browsing) {
            return Err(WalkthroughError::QuizOpen);
        }
        debug_assert!(section < self.sheet.sections.len(), "section out of range");
        debug_assert!(
            card < self.sheet.sections[section].cards.len(),
            "card out of range"
        );
        let key = (section, card);
        if !self.flipped.remove(&key) {
            self.flipped.insert(key);
        }
        Ok(())
    }

    /// Open the gating quiz ahead of the next section.
    ///
    /// Entered even when the section has no quiz items; the presentation
    /// layer offers an immediate skip in that case.
    ///
    /// # Errors
    ///
    /// Returns `WalkthroughError::QuizOpen` if a quiz is already visible and
    /// `WalkthroughError::AtLastSection` when there is no next section.
    pub fn request_advance(&mut self) -> Result<(), WalkthroughError> {
        if !matches!(self.phase, Phase::Browsing) {
            return Err(WalkthroughError::QuizOpen);
        }
        if self.current >= self.sheet.sections.len() - 1 {
            return Err(WalkthroughError::AtLastSection);
        }
        self.phase = Phase::Quizzing {
            answers: BTreeMap::new(),
        };
        Ok(())
    }

    /// Record an answer for one quiz question; last write wins.
    ///
    /// # Errors
    ///
    /// Returns `WalkthroughError::NoQuizOpen` while browsing,
    /// `WalkthroughError::AlreadySubmitted` while reviewing, and
    /// `WalkthroughError::QuestionOutOfRange` for an index past the quiz.
    pub fn answer_quiz(&mut self, index: usize, answer: bool) -> Result<(), WalkthroughError> {
        let quiz_len = self.current_section().quiz.len();
        match &mut self.phase {
            Phase::Quizzing { answers } => {
                if index >= quiz_len {
                    return Err(WalkthroughError::QuestionOutOfRange { index });
                }
                answers.insert(index, answer);
                Ok(())
            }
            Phase::Reviewing { .. } => Err(WalkthroughError::AlreadySubmitted),
            Phase::Browsing => Err(WalkthroughError::NoQuizOpen),
        }
    }

    /// Submit the open quiz for grading.
    ///
    /// Requires an answer for every question (vacuously satisfied by an
    /// empty quiz). Grading never gates: a fully wrong submission unlocks
    /// continuation the same as a perfect one.
    ///
    /// # Errors
    ///
    /// Returns `WalkthroughError::QuizIncomplete` while answers are missing,
    /// `WalkthroughError::NoQuizOpen` / `WalkthroughError::AlreadySubmitted`
    /// outside the quizzing phase.
    pub fn submit_quiz(&mut self) -> Result<(), WalkthroughError> {
        let total = self.current_section().quiz.len();
        match &mut self.phase {
            Phase::Quizzing { answers } => {
                if answers.len() != total {
                    return Err(WalkthroughError::QuizIncomplete {
                        answered: answers.len(),
                        total,
                    });
                }
                let answers = mem::take(answers);
                self.phase = Phase::Reviewing { answers };
                Ok(())
            }
            Phase::Reviewing { .. } => Err(WalkthroughError::AlreadySubmitted),
            Phase::Browsing => Err(WalkthroughError::NoQuizOpen),
        }
    }

    /// Skip the open quiz and move on, regardless of how much was answered.
    ///
    /// # Errors
    ///
    /// Returns `WalkthroughError::NoQuizOpen` while browsing and
    /// `WalkthroughError::AlreadySubmitted` after submission (continue
    /// handles that phase).
    pub fn skip_quiz(&mut self) -> Result<(), WalkthroughError> {
        match self.phase {
            Phase::Quizzing { .. } => {
                self.enter_next_section();
                Ok(())
            }
            Phase::Reviewing { .. } => Err(WalkthroughError::AlreadySubmitted),
            Phase::Browsing => Err(WalkthroughError::NoQuizOpen),
        }
    }

    /// Leave the quiz (submitted or not) and start browsing the next section.
    ///
    /// # Errors
    ///
    /// Returns `WalkthroughError::NoQuizOpen` while browsing.
    pub fn continue_after_quiz(&mut self) -> Result<(), WalkthroughError> {
        if matches!(self.phase, Phase::Browsing) {
            return Err(WalkthroughError::NoQuizOpen);
        }
        self.enter_next_section();
        Ok(())
    }

    /// Step back one section, clearing all transient state.
    ///
    /// # Errors
    ///
    /// Returns `WalkthroughError::QuizOpen` while a quiz is visible and
    /// `WalkthroughError::AtFirstSection` on section zero.
    pub fn request_previous(&mut self) -> Result<(), WalkthroughError> {
        if !matches!(self.phase, Phase::Browsing) {
            return Err(WalkthroughError::QuizOpen);
        }
        if self.current == 0 {
            return Err(WalkthroughError::AtFirstSection);
        }
        self.current -= 1;
        self.flipped.clear();
        self.phase = Phase::Browsing;
        Ok(())
    }

    /// Loop back to the first section from the end of the sheet.
    ///
    /// # Errors
    ///
    /// Returns `WalkthroughError::NotAtEnd` unless the last section is being
    /// browsed.
    pub fn restart(&mut self) -> Result<(), WalkthroughError> {
        if !self.at_end() {
            return Err(WalkthroughError::NotAtEnd);
        }
        self.current = 0;
        self.flipped.clear();
        self.phase = Phase::Browsing;
        Ok(())
    }

    // Quizzing is only entered while a next section exists, so this never
    // steps past the last index.
    fn enter_next_section(&mut self) {
        self.current += 1;
        self.flipped.clear();
        self.phase = Phase::Browsing;
    }
}
