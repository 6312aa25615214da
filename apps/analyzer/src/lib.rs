//! ATS résumé analysis engine.
//!
//! Scores an uploaded résumé document against a job profile: text extraction
//! from PDF/DOCX, pattern- and keyphrase-based skill detection, section
//! detection, and a weighted scoring model producing a 0–100 score plus a
//! skill-gap report. The HTTP layer, job queue, and persistence are external
//! collaborators; they call [`Analyzer::analyze`] and consume the serialized
//! [`AnalysisResult`].

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod progress;

pub use analysis::{Analyzer, AnalysisStage};
pub use config::AnalyzerConfig;
pub use errors::AnalyzerError;
pub use models::AnalysisResult;
