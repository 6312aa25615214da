//! Skill extraction: curated taxonomy matching merged with keyphrase
//! candidates.
//!
//! Two independent sources feed one flat list. Taxonomy hits are
//! high-precision (fixed 0.9 confidence); keyphrase candidates recover terms
//! the curated list misses, at the cost of noise and a score-derived
//! confidence. The two sources are deliberately NOT deduplicated: downstream
//! scoring only needs approximate skill density, and the density score counts
//! duplicates.

use regex::Regex;

use crate::analysis::keyphrase::KeyphraseExtractor;
use crate::models::{Skill, SkillCategory};

/// Taxonomy match confidence.
const TAXONOMY_CONFIDENCE: f32 = 0.9;

/// Curated skill keywords per category. Keywords are lowercase; matching is
/// whole-word against the lowercased text.
const TAXONOMY: [(SkillCategory, &[&str]); 7] = [
    (
        SkillCategory::Programming,
        &[
            "python", "javascript", "java", "c++", "c#", "php", "ruby", "go", "rust",
            "typescript", "kotlin", "swift", "scala", "r", "matlab",
        ],
    ),
    (
        SkillCategory::WebFrontend,
        &[
            "html", "css", "react", "angular", "vue", "jquery", "bootstrap", "sass", "less",
            "webpack", "babel", "redux", "vuex",
        ],
    ),
    (
        SkillCategory::WebBackend,
        &[
            "node.js", "express", "django", "flask", "spring", "asp.net", "laravel", "rails",
            "fastapi", "rest api", "graphql",
        ],
    ),
    (
        SkillCategory::Databases,
        &[
            "mysql", "postgresql", "mongodb", "redis", "sqlite", "oracle", "sql server",
            "elasticsearch", "cassandra", "dynamodb",
        ],
    ),
    (
        SkillCategory::Cloud,
        &[
            "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins",
            "gitlab ci", "github actions",
        ],
    ),
    (
        SkillCategory::DataScience,
        &[
            "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "jupyter",
            "matplotlib", "seaborn", "plotly", "spark",
        ],
    ),
    (
        SkillCategory::Mobile,
        &[
            "android", "ios", "react native", "flutter", "xamarin", "swiftui",
        ],
    ),
];

/// The curated taxonomy with one compiled whole-word pattern per keyword.
pub struct Taxonomy {
    entries: Vec<(SkillCategory, &'static str, Regex)>,
}

impl Taxonomy {
    pub fn new() -> Result<Self, regex::Error> {
        let mut entries = Vec::new();
        for (category, keywords) in TAXONOMY {
            for keyword in keywords {
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))?;
                entries.push((category, *keyword, pattern));
            }
        }
        Ok(Self { entries })
    }

    /// Whole-word taxonomy hits against the lowercased text, in category
    /// table order.
    fn matches(&self, text_lower: &str) -> Vec<Skill> {
        self.entries
            .iter()
            .filter(|(_, _, pattern)| pattern.is_match(text_lower))
            .map(|(category, keyword, _)| Skill {
                name: (*keyword).to_string(),
                confidence: TAXONOMY_CONFIDENCE,
                category: *category,
            })
            .collect()
    }

    /// Assigns a category to a free-form phrase by substring containment of
    /// any taxonomy keyword; `Other` when nothing matches.
    pub fn categorize(&self, phrase: &str) -> SkillCategory {
        let phrase_lower = phrase.to_lowercase();
        for (category, keyword, _) in &self.entries {
            if phrase_lower.contains(keyword) {
                return *category;
            }
        }
        SkillCategory::Other
    }
}

/// Runs both sources and merges their output into one flat list: taxonomy
/// hits first (table order), then keyphrase candidates above `min_score` in
/// the extractor's order.
pub fn extract_skills(
    taxonomy: &Taxonomy,
    model: &dyn KeyphraseExtractor,
    text: &str,
    min_score: f32,
) -> Vec<Skill> {
    let text_lower = text.to_lowercase();
    let mut skills = taxonomy.matches(&text_lower);

    for (phrase, score) in model.extract_keyphrases(text) {
        if score > min_score {
            let category = taxonomy.categorize(&phrase);
            skills.push(Skill {
                name: phrase,
                confidence: score,
                category,
            });
        }
    }

    skills
}
