//! Contact-field extraction: email, phone, name, location.
//!
//! Pure regex heuristics over the extracted text. Each field is detected
//! independently; a miss on one never blocks the others.

use regex::Regex;

use crate::models::PersonalInfo;

/// Compiled contact patterns, built once at analyzer construction.
pub struct PersonalPatterns {
    email: Regex,
    phone: Regex,
    /// Tried in order; the first candidate passing the name shape check wins.
    name: Vec<Regex>,
    location: Regex,
}

impl PersonalPatterns {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")?,
            phone: Regex::new(r"(\+?\d{1,4}[-.\s]?)?\(?(\d{3})\)?[-.\s]?(\d{3})[-.\s]?(\d{4})")?,
            name: vec![
                // Explicit label beats positional guessing.
                Regex::new(r"(?i)name[:\s]+(.+)")?,
                // A line-like span directly before an email/phone/address marker.
                Regex::new(r"(?i)(.+?)(?:\s*\n|\s*email|\s*phone|\s*address)")?,
            ],
            location: Regex::new(r"(?im)^.*?(?:location|address)[:\s]+(.+)$")?,
        })
    }

    /// First email match wins.
    fn email(&self, text: &str) -> Option<String> {
        self.email.find(text).map(|m| m.as_str().to_string())
    }

    /// First phone match wins; matched digit groups are concatenated with
    /// punctuation stripped (a leading `+` survives).
    fn phone(&self, text: &str) -> Option<String> {
        let caps = self.phone.captures(text)?;
        let joined: String = caps
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .collect();
        let normalized: String = joined
            .chars()
            .enumerate()
            .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
            .map(|(_, c)| c)
            .collect();
        if normalized.is_empty() {
            None
        } else {
            Some(normalized)
        }
    }

    /// A candidate is a plausible name when it has 2+ words and stays under
    /// 50 characters.
    fn name(&self, text: &str) -> Option<String> {
        for pattern in &self.name {
            if let Some(caps) = pattern.captures(text) {
                let candidate = caps.get(1)?.as_str().trim();
                if candidate.split_whitespace().count() >= 2 && candidate.len() < 50 {
                    return Some(candidate.to_string());
                }
            }
        }
        None
    }

    /// Captured only when a literal "location"/"address" label precedes a
    /// value on the same line.
    fn location(&self, text: &str) -> Option<String> {
        self.location
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }

    pub fn extract(&self, text: &str) -> PersonalInfo {
        PersonalInfo {
            name: self.name(text),
            email: self.email(text),
            phone: self.phone(text),
            location: self.location(text),
        }
    }
}
