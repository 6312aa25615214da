//! Section-header detection for the six canonical résumé section kinds.
//!
//! Detection is header-only: a kind is "found" iff at least one header-like
//! keyword matches anywhere in the text. Content between headers is never
//! validated.

use regex::Regex;

use crate::models::{SectionKind, SectionSignal, SectionSignals};

/// Header keyword pattern per section kind. Data, not control flow: adding a
/// synonym is an edit to this table.
const SECTION_PATTERNS: [(SectionKind, &str); 6] = [
    (
        SectionKind::Experience,
        r"(?i)(work\s+experience|professional\s+experience|employment|experience)",
    ),
    (
        SectionKind::Education,
        r"(?i)(education|academic|qualifications|degrees)",
    ),
    (
        SectionKind::Skills,
        r"(?i)(skills|technical\s+skills|competencies|expertise)",
    ),
    (
        SectionKind::Projects,
        r"(?i)(projects|portfolio|work\s+samples)",
    ),
    (
        SectionKind::Certifications,
        r"(?i)(certifications|certificates|licenses)",
    ),
    (
        SectionKind::Contact,
        r"(?i)(contact|personal\s+information|details)",
    ),
];

/// Compiled section-header patterns.
pub struct SectionPatterns {
    patterns: Vec<(SectionKind, Regex)>,
}

impl SectionPatterns {
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = SECTION_PATTERNS
            .iter()
            .map(|(kind, pattern)| Ok((*kind, Regex::new(pattern)?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { patterns })
    }

    /// Records every match offset per kind; `found` iff at least one match.
    pub fn detect(&self, text: &str) -> SectionSignals {
        let signals = self
            .patterns
            .iter()
            .map(|(kind, pattern)| {
                let positions: Vec<usize> = pattern.find_iter(text).map(|m| m.start()).collect();
                let signal = SectionSignal {
                    found: !positions.is_empty(),
                    positions,
                };
                (*kind, signal)
            })
            .collect();
        SectionSignals::new(signals)
    }
}
