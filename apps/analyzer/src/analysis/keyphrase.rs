//! Keyphrase extraction — the unsupervised signal source behind skill
//! detection.
//!
//! Pluggable, trait-based: the default extractor is a deterministic
//! in-process relevance scorer, and tests (or a future embedding-backed
//! model) can swap the backend without touching the pipeline.

use std::collections::{HashMap, HashSet};

use regex::Regex;

/// The keyphrase extraction seam. Returns candidate phrases with a relevance
/// score in (0, 1]. Implementations must be safe to share across analyses.
pub trait KeyphraseExtractor: Send + Sync {
    fn extract_keyphrases(&self, text: &str) -> Vec<(String, f32)>;
}

/// English stop-words excluded from candidate phrases.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have", "he",
    "her", "his", "how", "i", "if", "in", "into", "is", "it", "its", "me", "more", "most", "my",
    "no", "not", "of", "on", "or", "our", "out", "over", "she", "so", "some", "such", "than",
    "that", "the", "their", "them", "then", "there", "these", "they", "this", "to", "under", "up",
    "was", "we", "were", "what", "when", "where", "which", "while", "who", "will", "with", "would",
    "you", "your",
];

/// Default keyphrase backend: normalized-frequency scoring over 1–2-gram
/// candidates. Deterministic by construction, so repeated runs over identical
/// text yield identical scores.
///
/// Scoring: a candidate's score is its occurrence count divided by the
/// highest candidate count in the document; bigrams get a 1.25x salience
/// boost, clamped to 1.0. Ties order alphabetically.
pub struct FrequencyKeyphraseExtractor {
    top_k: usize,
    token: Regex,
    stop_words: HashSet<&'static str>,
}

impl FrequencyKeyphraseExtractor {
    pub fn new(top_k: usize) -> Result<Self, regex::Error> {
        Ok(Self {
            top_k,
            // Letters first, then word chars with inner dots (node.js) and
            // symbol suffixes (c++, c#).
            token: Regex::new(r"[a-z][a-z0-9+#]*(?:\.[a-z0-9]+)*")?,
            stop_words: STOP_WORDS.iter().copied().collect(),
        })
    }

    fn tokenize<'t>(&self, line: &'t str) -> Vec<&'t str> {
        self.token.find_iter(line).map(|m| m.as_str()).collect()
    }
}

impl KeyphraseExtractor for FrequencyKeyphraseExtractor {
    fn extract_keyphrases(&self, text: &str) -> Vec<(String, f32)> {
        let lowered = text.to_lowercase();
        let mut counts: HashMap<String, (u32, bool)> = HashMap::new();

        for line in lowered.lines() {
            let tokens = self.tokenize(line);
            for (i, token) in tokens.iter().enumerate() {
                if token.len() < 2 || self.stop_words.contains(token) {
                    continue;
                }
                counts.entry(token.to_string()).or_insert((0, false)).0 += 1;

                // Bigram with the next in-line token, both non-stop.
                if let Some(next) = tokens.get(i + 1) {
                    if next.len() >= 2 && !self.stop_words.contains(next) {
                        let bigram = format!("{token} {next}");
                        counts.entry(bigram).or_insert((0, true)).0 += 1;
                    }
                }
            }
        }

        let max_count = counts.values().map(|(c, _)| *c).max().unwrap_or(0);
        if max_count == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(String, f32)> = counts
            .into_iter()
            .map(|(phrase, (count, is_bigram))| {
                let base = count as f32 / max_count as f32;
                let score = if is_bigram {
                    (base * 1.25).min(1.0)
                } else {
                    base
                };
                (phrase, score)
            })
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(self.top_k);
        scored
    }
}
