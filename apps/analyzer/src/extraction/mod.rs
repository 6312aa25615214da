//! Text extraction from binary document formats.
//!
//! PDF extraction runs an ordered chain of strategies with an acceptance
//! predicate (trimmed length meets a threshold). A strategy that fails or
//! produces too little text is replaced wholesale by the next one; adding a
//! third method is a data change to the chain, not a control-flow change.

mod docx;
mod pdf;

use tracing::{debug, warn};

use crate::errors::AnalyzerError;
use crate::models::DocumentFormat;

/// A single extraction method in the fallback chain.
pub struct ExtractionStrategy {
    pub name: &'static str,
    pub run: fn(&[u8]) -> Result<String, AnalyzerError>,
}

/// PDF strategies in trial order: layout-aware extraction first, then the
/// simpler page-wise raw extraction.
pub const PDF_STRATEGIES: &[ExtractionStrategy] = &[
    ExtractionStrategy {
        name: "pdf-extract",
        run: pdf::extract_with_pdf_extract,
    },
    ExtractionStrategy {
        name: "lopdf",
        run: pdf::extract_with_lopdf,
    },
];

/// Extracts plain text from a document of the given format.
///
/// PDF output below `pdf_fallback_threshold` trimmed chars is discarded in
/// favor of the next strategy's output. DOCX failures downgrade to an empty
/// string; the orchestrator's minimum-length gate turns that into an
/// `InsufficientText` failure.
pub fn extract_text(
    bytes: &[u8],
    format: DocumentFormat,
    pdf_fallback_threshold: usize,
) -> Result<String, AnalyzerError> {
    match format {
        DocumentFormat::Pdf => Ok(run_strategies(PDF_STRATEGIES, bytes, pdf_fallback_threshold)),
        DocumentFormat::Docx => Ok(docx::extract(bytes)),
    }
}

/// Runs strategies in order, returning the first accepted result. A failed
/// strategy is logged and skipped; an unaccepted (too short) result is kept
/// only until a later strategy produces anything at all, matching the
/// replace-don't-merge fallback semantics.
fn run_strategies(strategies: &[ExtractionStrategy], bytes: &[u8], threshold: usize) -> String {
    let mut last_ok = String::new();
    for strategy in strategies {
        match (strategy.run)(bytes) {
            Ok(text) => {
                let trimmed_len = text.trim().len();
                debug!(strategy = strategy.name, trimmed_len, "extraction strategy ran");
                last_ok = text;
                if trimmed_len >= threshold {
                    return last_ok;
                }
            }
            Err(err) => {
                warn!(strategy = strategy.name, "extraction strategy failed: {err}");
            }
        }
    }
    last_ok
}
