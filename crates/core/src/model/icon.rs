/// Icon names the display layer ships glyphs for.
///
/// An icon outside this list still renders (the caller substitutes a fallback
/// glyph), so the validator treats an unknown name as a warning rather than
/// an error.
pub const SUPPORTED_ICONS: [&str; 8] = [
    "Users",
    "Target",
    "Award",
    "CheckCircle",
    "Star",
    "Clock",
    "Zap",
    "RotateCcw",
];

#[must_use]
pub fn is_supported_icon(name: &str) -> bool {
    SUPPORTED_ICONS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_is_exact_match() {
        assert!(is_supported_icon("Users"));
        assert!(is_supported_icon("RotateCcw"));
        assert!(!is_supported_icon("users"));
        assert!(!is_supported_icon("Sparkles"));
    }
}
