//! Data model for the analysis pipeline.
//!
//! `AnalysisResult` is the durable JSON contract consumed by storage, export,
//! and HTTP collaborators: field names and nesting are fixed (camelCase at
//! the report level) and must not change without a version bump.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AnalyzerError;

/// Supported binary document formats, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Maps a file extension to a format tag. Anything outside
    /// {.pdf, .docx, .doc} is an `UnsupportedFormat` error.
    pub fn from_path(path: &Path) -> Result<Self, AnalyzerError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" | "doc" => Ok(DocumentFormat::Docx),
            other => Err(AnalyzerError::UnsupportedFormat(format!(".{other}"))),
        }
    }
}

/// Contact fields pulled out of the résumé text. Each field is independently
/// present or absent; absent fields are omitted from the serialized report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// The six canonical résumé section kinds detected by header pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Certifications,
        SectionKind::Contact,
    ];

    /// The five kinds that participate in section scoring. Contact is
    /// detected but never scored.
    pub const SCORED: [SectionKind; 5] = [
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Certifications,
    ];

    /// Title-cased display name used in the serialized section scores.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Certifications => "Certifications",
            SectionKind::Contact => "Contact",
        }
    }
}

/// Detection outcome for one section kind: whether any header-like pattern
/// matched, and the character offset of every match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionSignal {
    pub found: bool,
    pub positions: Vec<usize>,
}

/// Read-only section detection report, one signal per canonical kind.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSignals {
    signals: Vec<(SectionKind, SectionSignal)>,
}

impl SectionSignals {
    pub fn new(signals: Vec<(SectionKind, SectionSignal)>) -> Self {
        Self { signals }
    }

    pub fn signal(&self, kind: SectionKind) -> &SectionSignal {
        static MISSING: SectionSignal = SectionSignal {
            found: false,
            positions: Vec::new(),
        };
        self.signals
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, s)| s)
            .unwrap_or(&MISSING)
    }

    pub fn found(&self, kind: SectionKind) -> bool {
        self.signal(kind).found
    }
}

/// Skill taxonomy categories. `Other` absorbs keyphrase candidates that no
/// curated keyword is a substring of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    WebFrontend,
    WebBackend,
    Databases,
    Cloud,
    DataScience,
    Mobile,
    Other,
}

/// A detected skill. Taxonomy matches carry a fixed 0.9 confidence; keyphrase
/// candidates carry their model relevance score. Duplicates across the two
/// sources are preserved (the density score counts them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub confidence: f32,
    pub category: SkillCategory,
}

/// A target role definition matched against extracted skills.
/// `weight_required + weight_preferred` is expected to sum to 1.0 but is not
/// enforced; that is the profile author's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub id: String,
    pub title: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub weight_required: f64,
    pub weight_preferred: f64,
}

/// Quality label derived from a section score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Excellent,
    Good,
    Average,
    Poor,
}

impl SectionStatus {
    /// excellent ≥ 90, good ≥ 70, average ≥ 50, else poor.
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            SectionStatus::Excellent
        } else if score >= 70 {
            SectionStatus::Good
        } else if score >= 50 {
            SectionStatus::Average
        } else {
            SectionStatus::Poor
        }
    }
}

/// Per-section score entry in the final report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub name: String,
    pub score: u32,
    pub status: SectionStatus,
    pub found: bool,
}

/// A position-title mention. Company/duration are placeholders: this
/// extractor is intentionally low-fidelity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub skills: Vec<String>,
}

/// Experience summary: estimated total years plus position-title mentions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceSummary {
    pub total_years: u32,
    pub positions: Vec<Position>,
}

/// A degree mention. Institution/year are placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// Outcome of matching extracted skills against a job profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResult {
    pub title: String,
    pub match_percentage: u32,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Keyword summary block of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSummary {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub density: usize,
}

/// Formatting block. The score is a constant placeholder until real layout
/// analysis lands; the issue list is reserved for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingReport {
    pub score: u32,
    pub issues: Vec<String>,
}

/// Terminal, immutable analysis report. The sole object returned across the
/// system boundary; serialized field names are the durable contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub personal_info: PersonalInfo,
    pub sections: Vec<SectionScore>,
    pub skills: Vec<Skill>,
    pub experience: ExperienceSummary,
    pub education: Vec<EducationEntry>,
    pub job_match: JobMatchResult,
    pub keywords: KeywordSummary,
    pub formatting: FormattingReport,
    /// ISO-8601 timestamp of the analysis run.
    pub analysis_date: String,
    pub text_length: usize,
}
