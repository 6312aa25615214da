//! Experience and education extraction.
//!
//! Intentionally low-fidelity: year tokens bound the experience estimate,
//! windowed title/degree patterns surface mentions, and company/institution
//! fields stay placeholders.

use chrono::{Datelike, Utc};
use regex::Regex;

use crate::models::{EducationEntry, ExperienceSummary, Position};

/// At most this many matches are kept per position pattern.
const MAX_PER_PATTERN: usize = 3;
/// At most this many positions are kept overall.
const MAX_POSITIONS: usize = 5;
/// At most this many degree entries are kept per pattern.
const MAX_DEGREES_PER_PATTERN: usize = 3;

pub struct ExperiencePatterns {
    year: Regex,
    /// Role-title words and domain-qualifier words, each with up to a
    /// 20-character context window on both sides.
    positions: Vec<Regex>,
}

impl ExperiencePatterns {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            year: Regex::new(r"\b(19|20)\d{2}\b")?,
            positions: vec![
                Regex::new(
                    r"(?i).{0,20}(developer|engineer|manager|analyst|specialist|coordinator|director|lead).{0,20}",
                )?,
                Regex::new(r"(?i).{0,20}(software|web|frontend|backend|full.?stack|data|systems).{0,20}")?,
            ],
        })
    }

    /// Total years = current calendar year minus the earliest year token
    /// found (1900–2099); 0 when no years occur or the earliest is not in
    /// the past.
    pub fn extract(&self, text: &str) -> ExperienceSummary {
        let years: Vec<i32> = self
            .year
            .find_iter(text)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();

        let current_year = Utc::now().year();
        let total_years = years
            .iter()
            .min()
            .filter(|min| **min < current_year)
            .map(|min| (current_year - min) as u32)
            .unwrap_or(0);

        let mut titles = Vec::new();
        for pattern in &self.positions {
            for m in pattern.find_iter(text).take(MAX_PER_PATTERN) {
                titles.push(m.as_str().trim().to_string());
            }
        }
        titles.truncate(MAX_POSITIONS);

        ExperienceSummary {
            total_years,
            positions: titles
                .into_iter()
                .map(|title| Position {
                    title,
                    company: "Unknown".to_string(),
                    duration: "Unknown".to_string(),
                    skills: Vec::new(),
                })
                .collect(),
        }
    }
}

pub struct EducationPatterns {
    degrees: Vec<Regex>,
}

impl EducationPatterns {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            degrees: vec![
                Regex::new(
                    r"(?i)(bachelor|master|phd|doctorate|diploma|certificate).{0,50}(computer|software|engineering|science|technology)",
                )?,
                Regex::new(r"(?i)(b\.?s\.?|m\.?s\.?|m\.?a\.?|b\.?a\.?|ph\.?d\.?)")?,
            ],
        })
    }

    /// Up to three mentions per degree pattern, no dedup across patterns.
    /// The degree text joins the captured groups; institution and year are
    /// placeholders.
    pub fn extract(&self, text: &str) -> Vec<EducationEntry> {
        let mut entries = Vec::new();
        for pattern in &self.degrees {
            for caps in pattern.captures_iter(text).take(MAX_DEGREES_PER_PATTERN) {
                let degree = caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                entries.push(EducationEntry {
                    degree,
                    institution: "Unknown".to_string(),
                    year: "Unknown".to_string(),
                });
            }
        }
        entries
    }
}
