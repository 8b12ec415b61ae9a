/// Aggregated view of walkthrough progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkthroughProgress {
    /// Zero-based index of the displayed section.
    pub section: usize,
    pub total_sections: usize,
    /// Cards currently face-up in the displayed section.
    pub flipped_in_section: usize,
    pub quiz_visible: bool,
    pub quiz_submitted: bool,
    /// True when the last section is being browsed; only restart remains.
    pub at_end: bool,
}
