use thiserror::Error;

/// Pipeline-level error type.
///
/// `UnsupportedFormat` and `InsufficientText` are terminal per document and
/// reach the caller as-is. `ExtractionMethod` is internal to the extraction
/// strategy chain and is recovered by falling through to the next strategy.
/// Everything else that escapes the pipeline is wrapped into
/// `AnalysisFailed`, carrying the original cause message for diagnostics.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Could not extract sufficient text from resume ({0} chars after trimming)")]
    InsufficientText(usize),

    #[error("Extraction method '{method}' failed: {message}")]
    ExtractionMethod {
        method: &'static str,
        message: String,
    },

    #[error("Analysis failed: {message}")]
    AnalysisFailed { message: String },
}

impl AnalyzerError {
    /// Collapses any non-terminal error into the `AnalysisFailed` wrapper.
    /// The typed per-document failures pass through untouched so callers can
    /// distinguish "bad upload" from "pipeline fault".
    pub fn into_analysis_failure(self) -> AnalyzerError {
        match self {
            AnalyzerError::UnsupportedFormat(_) | AnalyzerError::InsufficientText(_) => self,
            other => AnalyzerError::AnalysisFailed {
                message: other.to_string(),
            },
        }
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(err: std::io::Error) -> Self {
        AnalyzerError::AnalysisFailed {
            message: err.to_string(),
        }
    }
}
