//! The analysis pipeline: extraction, detection, matching, scoring, and the
//! orchestrator that sequences them into one immutable report.

pub mod experience;
pub mod keyphrase;
pub mod matching;
pub mod personal;
pub mod sections;
pub mod scoring;
pub mod skills;

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use tracing::{debug, error, info};

use crate::analysis::experience::{EducationPatterns, ExperiencePatterns};
use crate::analysis::keyphrase::{FrequencyKeyphraseExtractor, KeyphraseExtractor};
use crate::analysis::personal::PersonalPatterns;
use crate::analysis::sections::SectionPatterns;
use crate::analysis::skills::Taxonomy;
use crate::config::AnalyzerConfig;
use crate::errors::AnalyzerError;
use crate::extraction;
use crate::models::{AnalysisResult, DocumentFormat, FormattingReport, KeywordSummary};
use crate::progress::{ProgressSink, CHECKPOINTS};

/// Pipeline state. An analysis moves Extracting → Analyzing → Done, or to
/// Failed from either active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    Extracting,
    Analyzing,
    Done,
    Failed,
}

/// The analysis engine. Holds only read-only configuration: compiled
/// patterns, taxonomy tables, and the keyphrase model, all built once at
/// construction. Safe to share across concurrent analyses.
pub struct Analyzer {
    config: AnalyzerConfig,
    personal: PersonalPatterns,
    sections: SectionPatterns,
    experience: ExperiencePatterns,
    education: EducationPatterns,
    taxonomy: Taxonomy,
    keyphrase: Box<dyn KeyphraseExtractor>,
}

impl Analyzer {
    /// Builds an analyzer with the default deterministic keyphrase backend.
    pub fn new(config: AnalyzerConfig) -> anyhow::Result<Self> {
        let keyphrase = FrequencyKeyphraseExtractor::new(config.keyphrase_top_k)
            .context("failed to compile keyphrase token pattern")?;
        Self::with_keyphrase_extractor(config, Box::new(keyphrase))
    }

    /// Builds an analyzer with a caller-supplied keyphrase backend. Tests
    /// substitute a deterministic stub through this constructor.
    pub fn with_keyphrase_extractor(
        config: AnalyzerConfig,
        keyphrase: Box<dyn KeyphraseExtractor>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            personal: PersonalPatterns::new().context("failed to compile contact patterns")?,
            sections: SectionPatterns::new().context("failed to compile section patterns")?,
            experience: ExperiencePatterns::new()
                .context("failed to compile experience patterns")?,
            education: EducationPatterns::new().context("failed to compile degree patterns")?,
            taxonomy: Taxonomy::new().context("failed to compile skill taxonomy")?,
            keyphrase,
        })
    }

    /// Runs a full analysis without progress reporting.
    pub fn analyze_file(
        &self,
        path: &Path,
        job_profile_id: Option<&str>,
    ) -> Result<AnalysisResult, AnalyzerError> {
        self.analyze(path, job_profile_id, &crate::progress::NoopProgress)
    }

    /// Runs the full pipeline over one document and returns the terminal
    /// report. Fails with `UnsupportedFormat` or `InsufficientText` for bad
    /// uploads; every other failure is wrapped into `AnalysisFailed`. A
    /// partial result is never returned.
    pub fn analyze(
        &self,
        path: &Path,
        job_profile_id: Option<&str>,
        progress: &dyn ProgressSink,
    ) -> Result<AnalysisResult, AnalyzerError> {
        let result = self.run(path, job_profile_id, progress);
        match &result {
            Ok(report) => {
                info!(
                    stage = ?AnalysisStage::Done,
                    overall_score = report.overall_score,
                    "analysis finished"
                );
            }
            Err(err) => {
                error!(stage = ?AnalysisStage::Failed, "analysis failed: {err}");
            }
        }
        result.map_err(AnalyzerError::into_analysis_failure)
    }

    fn run(
        &self,
        path: &Path,
        job_profile_id: Option<&str>,
        progress: &dyn ProgressSink,
    ) -> Result<AnalysisResult, AnalyzerError> {
        let [start, extracting, finalizing, complete] = CHECKPOINTS;
        progress.report(start.0, start.1);

        let mut stage = AnalysisStage::Extracting;
        info!(?stage, path = %path.display(), "starting analysis");

        let format = DocumentFormat::from_path(path)?;
        let bytes = fs::read(path)?;

        progress.report(extracting.0, extracting.1);
        let raw = extraction::extract_text(&bytes, format, self.config.pdf_fallback_threshold)?;
        let text = raw.trim();
        if text.len() < self.config.min_text_len {
            return Err(AnalyzerError::InsufficientText(text.len()));
        }

        stage = AnalysisStage::Analyzing;
        debug!(?stage, text_length = text.len(), "text extracted");

        // The detection passes are independent of each other; only matching
        // and scoring consume their outputs.
        let personal_info = self.personal.extract(text);
        let section_signals = self.sections.detect(text);
        let skills = skills::extract_skills(
            &self.taxonomy,
            self.keyphrase.as_ref(),
            text,
            self.config.keyphrase_min_score,
        );
        let experience = self.experience.extract(text);
        let education = self.education.extract(text);

        progress.report(finalizing.0, finalizing.1);
        let sections = scoring::score_sections(&section_signals, text.len());
        let profile = matching::builtin_profile(job_profile_id);
        let job_match = matching::match_against_profile(&skills, &profile);
        let overall_score =
            scoring::compute_overall(&sections, job_match.match_percentage, skills.len());

        let keywords = KeywordSummary {
            found: skills.iter().map(|s| s.name.clone()).collect(),
            missing: job_match.missing_skills.clone(),
            density: skills.len(),
        };

        let result = AnalysisResult {
            overall_score,
            personal_info,
            sections,
            skills,
            experience,
            education,
            job_match,
            keywords,
            formatting: FormattingReport {
                score: scoring::FORMATTING_SCORE,
                issues: Vec::new(),
            },
            analysis_date: Utc::now().to_rfc3339(),
            text_length: text.len(),
        };

        progress.report(complete.0, complete.1);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{build_docx, write_docx};
    use crate::models::SkillCategory;
    use std::sync::Mutex;

    struct CollectingProgress(Mutex<Vec<u8>>);

    impl ProgressSink for CollectingProgress {
        fn report(&self, percent: u8, _message: &str) {
            self.0.lock().unwrap().push(percent);
        }
    }

    fn analyzer() -> Analyzer {
        Analyzer::new(AnalyzerConfig::default()).unwrap()
    }

    const RESUME_PARAGRAPHS: &[&str] = &[
        "John Doe",
        "Email: john@example.com",
        "Phone: 555-123-4567",
        "Location: Berlin, Germany",
        "Experience",
        "Senior Software Engineer, 2018 to 2023",
        "Built web platforms with Python and React and PostgreSQL",
        "Education",
        "Bachelor of Science in Computer Science, 2014",
        "Skills",
        "Python, React, PostgreSQL, Docker, AWS, JavaScript, HTML, CSS",
    ];

    fn resume_file() -> tempfile::TempDir {
        write_docx("resume.docx", RESUME_PARAGRAPHS)
    }

    #[test]
    fn test_end_to_end_docx_analysis() {
        let dir = resume_file();
        let result = analyzer()
            .analyze_file(&dir.path().join("resume.docx"), None)
            .unwrap();

        assert_eq!(result.personal_info.email.as_deref(), Some("john@example.com"));
        assert!(result.overall_score <= 100);
        assert_eq!(result.sections.len(), 5);
        assert!(result.skills.iter().any(|s| s.name == "python"));
        assert!(result.skills.iter().any(|s| s.name == "react"));
        assert!(result.experience.total_years >= 1);
        assert!(!result.education.is_empty());
        assert_eq!(result.keywords.density, result.skills.len());
        assert_eq!(result.formatting.score, 85);
        assert!(result.text_length >= 50);
    }

    #[test]
    fn test_progress_checkpoints_reported_in_order() {
        let dir = resume_file();
        let sink = CollectingProgress(Mutex::new(Vec::new()));
        analyzer()
            .analyze(&dir.path().join("resume.docx"), None, &sink)
            .unwrap();
        assert_eq!(*sink.0.lock().unwrap(), vec![10, 30, 80, 100]);
    }

    #[test]
    fn test_insufficient_text_fails_before_100_percent() {
        let dir = write_docx("tiny.docx", &["too short"]);
        let sink = CollectingProgress(Mutex::new(Vec::new()));
        let err = analyzer()
            .analyze(&dir.path().join("tiny.docx"), None, &sink)
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::InsufficientText(_)));
        assert!(!sink.0.lock().unwrap().contains(&100));
    }

    #[test]
    fn test_unsupported_extension_is_not_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "some text").unwrap();
        let err = analyzer().analyze_file(&path, None).unwrap_err();
        assert!(matches!(err, AnalyzerError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_wraps_into_analysis_failed() {
        let err = analyzer()
            .analyze_file(Path::new("/nonexistent/resume.pdf"), None)
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::AnalysisFailed { .. }));
    }

    #[test]
    fn test_corrupt_pdf_never_returns_partial_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.pdf");
        std::fs::write(&path, b"%PDF-1.4 garbage").unwrap();
        let err = analyzer().analyze_file(&path, None).unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::InsufficientText(_) | AnalyzerError::AnalysisFailed { .. }
        ));
    }

    #[test]
    fn test_unknown_profile_id_substitutes_fullstack() {
        let dir = resume_file();
        let result = analyzer()
            .analyze_file(&dir.path().join("resume.docx"), Some("xyz"))
            .unwrap();
        assert_eq!(result.job_match.title, "Full Stack Developer");
    }

    #[test]
    fn test_idempotent_scores_across_runs() {
        let dir = resume_file();
        let path = dir.path().join("resume.docx");
        let analyzer = analyzer();
        let first = analyzer.analyze_file(&path, None).unwrap();
        let second = analyzer.analyze_file(&path, None).unwrap();
        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.sections, second.sections);
        assert_eq!(
            first.job_match.match_percentage,
            second.job_match.match_percentage
        );
    }

    #[test]
    fn test_report_serializes_with_contract_field_names() {
        let dir = resume_file();
        let result = analyzer()
            .analyze_file(&dir.path().join("resume.docx"), None)
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();

        for key in [
            "overallScore",
            "personalInfo",
            "sections",
            "skills",
            "experience",
            "education",
            "jobMatch",
            "keywords",
            "formatting",
            "analysisDate",
            "textLength",
        ] {
            assert!(json.get(key).is_some(), "missing top-level key {key}");
        }
        assert_eq!(json.as_object().unwrap().len(), 11);
        assert!(json["keywords"].get("found").is_some());
        assert!(json["keywords"].get("missing").is_some());
        assert!(json["keywords"].get("density").is_some());
        assert!(json["formatting"].get("issues").is_some());
        assert!(json["experience"].get("totalYears").is_some());
    }

    #[test]
    fn test_skills_with_stubbed_keyphrase_backend() {
        struct Stub;
        impl KeyphraseExtractor for Stub {
            fn extract_keyphrases(&self, _text: &str) -> Vec<(String, f32)> {
                vec![("microservices".to_string(), 0.7)]
            }
        }

        let dir = resume_file();
        let analyzer =
            Analyzer::with_keyphrase_extractor(AnalyzerConfig::default(), Box::new(Stub))
                .unwrap();
        let result = analyzer
            .analyze_file(&dir.path().join("resume.docx"), None)
            .unwrap();
        let stubbed = result
            .skills
            .iter()
            .find(|s| s.name == "microservices")
            .unwrap();
        assert!((stubbed.confidence - 0.7).abs() < f32::EPSILON);
        // "microservices" contains the taxonomy keyword "r".
        assert_eq!(stubbed.category, SkillCategory::Programming);
    }

    #[test]
    fn test_build_docx_fixture_roundtrip() {
        let bytes = build_docx(&["sanity check paragraph"]);
        assert!(bytes.len() > 100);
    }
}
