//! Structural validation of candidate cheat-sheet documents.
//!
//! The validator never fails: malformed input of any shape comes back as a
//! [`ValidationReport`] with the problems listed. Errors block rendering,
//! warnings do not, and the whole document is checked in one pass — a fatal
//! problem in one section does not hide problems in the next.

use serde_json::Value;

use crate::model::{Card, CheatSheet, QuizItem, Section, SUPPORTED_ICONS, is_supported_icon};

const EXPECTED_TOP_LEVEL: [&str; 4] = ["name", "role", "description", "sections"];

/// Outcome of validating one candidate document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    errors: Vec<String>,
    warnings: Vec<String>,
    data: Option<CheatSheet>,
}

impl ValidationReport {
    /// True when no fatal problems were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when the document can be handed to a display layer.
    ///
    /// Equivalent to [`ValidationReport::is_valid`]: every blocking
    /// condition is recorded as an error, everything else as a warning.
    #[must_use]
    pub fn can_render(&self) -> bool {
        self.errors.is_empty() && self.data.is_some()
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// The typed document, present only when [`ValidationReport::can_render`].
    #[must_use]
    pub fn data(&self) -> Option<&CheatSheet> {
        self.data.as_ref()
    }

    /// Consumes the report, yielding the typed document when renderable.
    #[must_use]
    pub fn into_data(self) -> Option<CheatSheet> {
        self.data
    }

    fn parse_failure(message: &str) -> Self {
        Self {
            errors: vec![format!("Invalid JSON: {message}")],
            warnings: Vec::new(),
            data: None,
        }
    }
}

/// Validates raw text: parses it as JSON, then applies [`validate`].
///
/// A parse failure produces a report with a single fatal error embedding the
/// parser's message and no warnings.
#[must_use]
pub fn validate_text(input: &str) -> ValidationReport {
    match serde_json::from_str::<Value>(input) {
        Ok(value) => validate(&value),
        Err(err) => ValidationReport::parse_failure(&err.to_string()),
    }
}

/// Validates an already-parsed candidate document.
#[must_use]
pub fn validate(value: &Value) -> ValidationReport {
    let Some(map) = value.as_object() else {
        return ValidationReport {
            errors: vec!["Document root must be a JSON object".to_string()],
            warnings: Vec::new(),
            data: None,
        };
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let name = match non_empty_str(map.get("name")) {
        Some(name) => Some(name.to_string()),
        None => {
            errors.push(r#"Missing or invalid "name" field (must be a string)"#.to_string());
            None
        }
    };

    let role = recommended_str(map.get("role"), "role", &mut warnings);
    let description = recommended_str(map.get("description"), "description", &mut warnings);

    let mut sections = Vec::new();
    match map.get("sections").and_then(Value::as_array) {
        None => {
            errors.push(r#"Missing or invalid "sections" field (must be an array)"#.to_string());
        }
        Some(raw) if raw.is_empty() => {
            errors.push(r#""sections" array is empty"#.to_string());
        }
        Some(raw) => {
            for (index, section) in raw.iter().enumerate() {
                if let Some(section) =
                    validate_section(section, index + 1, &mut errors, &mut warnings)
                {
                    sections.push(section);
                }
            }
        }
    }

    let extra: Vec<&str> = map
        .keys()
        .map(String::as_str)
        .filter(|key| !EXPECTED_TOP_LEVEL.contains(key))
        .collect();
    if !extra.is_empty() {
        warnings.push(format!(
            "Unexpected fields found (will be ignored): {}",
            extra.join(", ")
        ));
    }

    let data = match (errors.is_empty(), name) {
        (true, Some(name)) => Some(CheatSheet {
            name,
            role,
            description,
            sections,
        }),
        _ => None,
    };

    ValidationReport {
        errors,
        warnings,
        data,
    }
}

fn validate_section(
    section: &Value,
    ordinal: usize,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) -> Option<Section> {
    let prefix = format!("Section {ordinal}");
    let errors_before = errors.len();

    let title = non_empty_str(section.get("title")).map(str::to_string);
    if title.is_none() {
        errors.push(format!(r#"{prefix}: Missing or invalid "title" field"#));
    }

    let icon = match non_empty_str(section.get("icon")) {
        Some(icon) => {
            if !is_supported_icon(icon) {
                warnings.push(format!(
                    r#"{prefix}: Icon "{icon}" may not be supported. Valid icons: {}"#,
                    SUPPORTED_ICONS.join(", ")
                ));
            }
            Some(icon.to_string())
        }
        None => {
            errors.push(format!(
                r#"{prefix}: Missing or invalid "icon" field (must be a string like "Users", "Target", "Award")"#
            ));
            None
        }
    };

    let mut cards = Vec::new();
    match section.get("cards").and_then(Value::as_array) {
        None => {
            errors.push(format!(
                r#"{prefix}: Missing or invalid "cards" field (must be an array)"#
            ));
        }
        Some(raw) if raw.is_empty() => {
            warnings.push(format!(r#"{prefix}: "cards" array is empty"#));
        }
        Some(raw) => {
            for (index, card) in raw.iter().enumerate() {
                if let Some(card) = validate_card(card, &prefix, index + 1, errors) {
                    cards.push(card);
                }
            }
        }
    }

    let mut quiz = Vec::new();
    match section.get("quiz").and_then(Value::as_array) {
        None => {
            warnings.push(format!(
                r#"{prefix}: Missing or invalid "quiz" field (recommended, but not required)"#
            ));
        }
        Some(raw) if raw.is_empty() => {
            warnings.push(format!(r#"{prefix}: "quiz" array is empty"#));
        }
        Some(raw) => {
            for (index, item) in raw.iter().enumerate() {
                if let Some(item) = validate_quiz_item(item, &prefix, index + 1, errors) {
                    quiz.push(item);
                }
            }
        }
    }

    // Only assembled when the section contributed no errors; the report's
    // data is dropped anyway as soon as any error exists.
    match (errors.len() == errors_before, title, icon) {
        (true, Some(title), Some(icon)) => Some(Section {
            title,
            icon,
            cards,
            quiz,
        }),
        _ => None,
    }
}

fn validate_card(
    card: &Value,
    prefix: &str,
    ordinal: usize,
    errors: &mut Vec<String>,
) -> Option<Card> {
    let front = non_empty_str(card.get("front")).map(str::to_string);
    if front.is_none() {
        errors.push(format!(
            r#"{prefix}, Card {ordinal}: Missing or invalid "front" field"#
        ));
    }

    let back = non_empty_str(card.get("back")).map(str::to_string);
    if back.is_none() {
        errors.push(format!(
            r#"{prefix}, Card {ordinal}: Missing or invalid "back" field"#
        ));
    }

    match (front, back) {
        (Some(front), Some(back)) => Some(Card { front, back }),
        _ => None,
    }
}

fn validate_quiz_item(
    item: &Value,
    prefix: &str,
    ordinal: usize,
    errors: &mut Vec<String>,
) -> Option<QuizItem> {
    let question = non_empty_str(item.get("question")).map(str::to_string);
    if question.is_none() {
        errors.push(format!(
            r#"{prefix}, Quiz {ordinal}: Missing or invalid "question" field"#
        ));
    }

    // `as_bool` only accepts literal JSON booleans; "true", 1 and null are
    // all rejected here.
    let answer = item.get("answer").and_then(Value::as_bool);
    if answer.is_none() {
        errors.push(format!(
            r#"{prefix}, Quiz {ordinal}: Missing or invalid "answer" field (must be true or false)"#
        ));
    }

    match (question, answer) {
        (Some(question), Some(answer)) => Some(QuizItem { question, answer }),
        _ => None,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value?.as_str().filter(|s| !s.is_empty())
}

fn recommended_str(
    value: Option<&Value>,
    field: &str,
    warnings: &mut Vec<String>,
) -> Option<String> {
    match non_empty_str(value) {
        Some(s) => Some(s.to_string()),
        None => {
            warnings.push(format!(
                r#"Missing or invalid "{field}" field (recommended)"#
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn well_formed() -> Value {
        json!({
            "name": "John Doe",
            "role": "Software Engineer",
            "description": "Tailored to your experience",
            "sections": [
                {
                    "title": "Behavioral Questions",
                    "icon": "Users",
                    "cards": [
                        { "front": "Tell me about yourself", "back": "I'm an engineer..." }
                    ],
                    "quiz": [
                        { "question": "Should you use the STAR method?", "answer": true }
                    ]
                }
            ]
        })
    }

    #[test]
    fn well_formed_document_is_renderable() {
        let report = validate(&well_formed());
        assert!(report.is_valid());
        assert!(report.can_render());
        assert!(report.errors().is_empty());
        assert!(report.warnings().is_empty());

        let sheet = report.data().unwrap();
        assert_eq!(sheet.name, "John Doe");
        assert_eq!(sheet.role.as_deref(), Some("Software Engineer"));
        assert_eq!(sheet.sections.len(), 1);
        assert_eq!(sheet.sections[0].cards[0].front, "Tell me about yourself");
        assert!(sheet.sections[0].quiz[0].answer);
    }

    #[test]
    fn unparseable_text_yields_single_error() {
        let report = validate_text("{not json");
        assert!(!report.can_render());
        assert_eq!(report.errors().len(), 1);
        assert!(report.errors()[0].starts_with("Invalid JSON:"));
        assert!(report.warnings().is_empty());
        assert!(report.data().is_none());
    }

    #[test]
    fn non_object_root_is_a_fatal_error() {
        for value in [json!([1, 2]), json!("text"), json!(42), json!(null)] {
            let report = validate(&value);
            assert!(!report.can_render());
            assert_eq!(
                report.errors(),
                &["Document root must be a JSON object".to_string()]
            );
        }
    }

    #[test]
    fn missing_name_is_fatal() {
        let mut doc = well_formed();
        doc.as_object_mut().unwrap().remove("name");
        let report = validate(&doc);
        assert!(!report.can_render());
        assert!(report.errors()[0].contains(r#""name""#));
        assert!(report.data().is_none());
    }

    #[test]
    fn non_string_and_empty_name_are_fatal() {
        for bad in [json!(7), json!(""), json!(null)] {
            let mut doc = well_formed();
            doc["name"] = bad;
            assert!(!validate(&doc).can_render());
        }
    }

    #[test]
    fn missing_role_and_description_only_warn() {
        let mut doc = well_formed();
        doc.as_object_mut().unwrap().remove("role");
        doc.as_object_mut().unwrap().remove("description");
        let report = validate(&doc);
        assert!(report.can_render());
        assert_eq!(report.warnings().len(), 2);
        assert!(report.warnings()[0].contains("recommended"));
    }

    #[test]
    fn missing_sections_is_fatal() {
        let mut doc = well_formed();
        doc.as_object_mut().unwrap().remove("sections");
        let report = validate(&doc);
        assert!(!report.can_render());
        assert!(report.errors()[0].contains(r#""sections""#));
    }

    #[test]
    fn empty_sections_is_fatal() {
        let mut doc = well_formed();
        doc["sections"] = json!([]);
        let report = validate(&doc);
        assert!(!report.can_render());
        assert_eq!(report.errors(), &[r#""sections" array is empty"#.to_string()]);
    }

    #[test]
    fn section_errors_name_the_ordinal() {
        let mut doc = well_formed();
        doc["sections"] = json!([
            { "title": "Ok", "icon": "Users", "cards": [{ "front": "f", "back": "b" }] },
            { "icon": "Users", "cards": [{ "front": "f", "back": "b" }] }
        ]);
        let report = validate(&doc);
        assert!(!report.can_render());
        assert!(report.errors().iter().any(|e| e.starts_with("Section 2:")));
    }

    #[test]
    fn unknown_icon_is_a_warning_not_an_error() {
        let mut doc = well_formed();
        doc["sections"][0]["icon"] = json!("Sparkles");
        let report = validate(&doc);
        assert!(report.can_render());
        assert!(
            report
                .warnings()
                .iter()
                .any(|w| w.contains(r#"Icon "Sparkles" may not be supported"#))
        );
    }

    #[test]
    fn empty_cards_array_is_a_warning() {
        let mut doc = well_formed();
        doc["sections"][0]["cards"] = json!([]);
        let report = validate(&doc);
        assert!(report.can_render());
        assert!(
            report
                .warnings()
                .iter()
                .any(|w| w.contains(r#""cards" array is empty"#))
        );
    }

    #[test]
    fn missing_cards_field_is_fatal() {
        let mut doc = well_formed();
        doc["sections"][0].as_object_mut().unwrap().remove("cards");
        assert!(!validate(&doc).can_render());
    }

    #[test]
    fn card_errors_name_section_and_card_ordinals() {
        let mut doc = well_formed();
        doc["sections"][0]["cards"] = json!([
            { "front": "ok", "back": "ok" },
            { "front": "", "back": 3 }
        ]);
        let report = validate(&doc);
        let expected = [
            r#"Section 1, Card 2: Missing or invalid "front" field"#,
            r#"Section 1, Card 2: Missing or invalid "back" field"#,
        ];
        assert_eq!(report.errors(), &expected);
    }

    #[test]
    fn missing_quiz_only_warns() {
        let mut doc = well_formed();
        doc["sections"][0].as_object_mut().unwrap().remove("quiz");
        let report = validate(&doc);
        assert!(report.can_render());
        assert!(
            report
                .warnings()
                .iter()
                .any(|w| w.contains(r#""quiz" field (recommended"#))
        );
        assert!(report.data().unwrap().sections[0].quiz.is_empty());
    }

    #[test]
    fn truthy_answers_are_rejected() {
        for bad in [json!("true"), json!(1), json!(null)] {
            let mut doc = well_formed();
            doc["sections"][0]["quiz"][0]["answer"] = bad;
            let report = validate(&doc);
            assert!(!report.can_render());
            assert!(
                report
                    .errors()
                    .iter()
                    .any(|e| e.contains(r#""answer" field (must be true or false)"#))
            );
        }
    }

    #[test]
    fn unknown_top_level_keys_aggregate_into_one_warning() {
        let mut doc = well_formed();
        doc["avatar"] = json!("x.png");
        doc["zeta"] = json!(1);
        let report = validate(&doc);
        assert!(report.can_render());
        let aggregate: Vec<_> = report
            .warnings()
            .iter()
            .filter(|w| w.starts_with("Unexpected fields found"))
            .collect();
        assert_eq!(aggregate.len(), 1);
        assert!(aggregate[0].contains("avatar"));
        assert!(aggregate[0].contains("zeta"));
        assert!(report.errors().is_empty());
    }

    #[test]
    fn report_accumulates_across_independent_rules() {
        let doc = json!({
            "sections": [
                { "icon": "Users", "cards": [{ "front": "f" }] }
            ],
            "extra": true
        });
        let report = validate(&doc);
        // name, title and card back all reported despite earlier failures.
        assert!(report.errors().iter().any(|e| e.contains(r#""name""#)));
        assert!(report.errors().iter().any(|e| e.contains(r#""title""#)));
        assert!(report.errors().iter().any(|e| e.contains(r#""back""#)));
        assert!(
            report
                .warnings()
                .iter()
                .any(|w| w.starts_with("Unexpected fields"))
        );
    }

    #[test]
    fn spec_example_single_section_renders() {
        let doc = json!({
            "name": "A",
            "sections": [{
                "title": "T",
                "icon": "Users",
                "cards": [{ "front": "Q", "back": "R" }],
                "quiz": [{ "question": "Q1", "answer": true }]
            }]
        });
        let report = validate(&doc);
        assert!(report.can_render());
        assert_eq!(report.data().unwrap().section_count(), 1);
    }
}
