mod icon;
mod manifest;
mod sheet;

pub use icon::{SUPPORTED_ICONS, is_supported_icon};
pub use manifest::{Manifest, ManifestEntry, display_name};
pub use sheet::{Card, CheatSheet, QuizItem, Section};
