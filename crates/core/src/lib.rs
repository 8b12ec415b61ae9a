#![forbid(unsafe_code)]

pub mod model;
pub mod validate;

pub use model::{
    Card, CheatSheet, Manifest, ManifestEntry, QuizItem, Section, display_name, is_supported_icon,
    SUPPORTED_ICONS,
};
pub use validate::{ValidationReport, validate, validate_text};
