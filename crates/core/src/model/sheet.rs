use serde::{Deserialize, Serialize};

//
// ─── SHEET TYPES ───────────────────────────────────────────────────────────────
//

/// A complete named cheat sheet: metadata plus an ordered list of sections.
///
/// Instances that come out of [`crate::validate`] are renderable: `sections`
/// is non-empty and every required field has passed its type check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatSheet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sections: Vec<Section>,
}

impl CheatSheet {
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of cards across all sections.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }

    /// Total number of quiz questions across all sections.
    #[must_use]
    pub fn quiz_count(&self) -> usize {
        self.sections.iter().map(|s| s.quiz.len()).sum()
    }
}

/// One topical grouping of flip cards with an optional gating quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub icon: String,
    pub cards: Vec<Card>,
    #[serde(default)]
    pub quiz: Vec<QuizItem>,
}

/// A two-sided flip card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

/// A true/false comprehension check tied to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub answer: bool,
}
