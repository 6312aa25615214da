//! The two PDF extraction methods behind the fallback chain.

use crate::errors::AnalyzerError;

/// Layout-aware whole-document extraction via `pdf-extract`. Preferred for
/// multi-column and otherwise complex layouts.
pub fn extract_with_pdf_extract(bytes: &[u8]) -> Result<String, AnalyzerError> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        AnalyzerError::ExtractionMethod {
            method: "pdf-extract",
            message: e.to_string(),
        }
    })?;
    Ok(text.trim().to_string())
}

/// Simpler page-by-page extraction via `lopdf`, pages joined with newlines.
/// Picks up text on documents where the layout-aware pass comes back near
/// empty.
pub fn extract_with_lopdf(bytes: &[u8]) -> Result<String, AnalyzerError> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| AnalyzerError::ExtractionMethod {
        method: "lopdf",
        message: e.to_string(),
    })?;

    let mut pages = Vec::new();
    for page_number in doc.get_pages().keys() {
        let page_text =
            doc.extract_text(&[*page_number])
                .map_err(|e| AnalyzerError::ExtractionMethod {
                    method: "lopdf",
                    message: format!("page {page_number}: {e}"),
                })?;
        pages.push(page_text);
    }
    Ok(pages.join("\n").trim().to_string())
}
