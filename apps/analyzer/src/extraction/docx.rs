//! DOCX text extraction: unzip the OOXML container and stream the text runs
//! out of `word/document.xml`.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::warn;

/// Extracts plain text from DOCX bytes. Any failure (not a zip, missing
/// document part, malformed XML) downgrades to an empty string; the
/// orchestrator's length gate reports that as insufficient text.
pub fn extract(bytes: &[u8]) -> String {
    match try_extract(bytes) {
        Ok(text) => text,
        Err(message) => {
            warn!("DOCX extraction failed: {message}");
            String::new()
        }
    }
}

fn try_extract(bytes: &[u8]) -> Result<String, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| e.to_string())?
        .read_to_string(&mut document_xml)
        .map_err(|e| e.to_string())?;

    text_runs(&document_xml)
}

/// Walks the document XML, concatenating `<w:t>` runs with a newline per
/// paragraph and translating explicit tabs/breaks.
fn text_runs(document_xml: &str) -> Result<String, String> {
    let mut reader = Reader::from_str(document_xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" => out.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                out.push_str(&t.unescape().map_err(|e| e.to_string())?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::build_docx;

    #[test]
    fn test_extracts_paragraph_text() {
        let bytes = build_docx(&["John Doe", "Senior Software Engineer"]);
        let text = extract(&bytes);
        assert!(text.contains("John Doe"));
        assert!(text.contains("Senior Software Engineer"));
    }

    #[test]
    fn test_paragraphs_are_newline_separated() {
        let bytes = build_docx(&["first", "second"]);
        let text = extract(&bytes);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_not_a_zip_returns_empty() {
        assert_eq!(extract(b"plain bytes"), "");
    }

    #[test]
    fn test_zip_without_document_part_returns_empty() {
        use std::io::Write;
        use zip::write::SimpleFileOptions;

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("unrelated.txt", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"nothing here").unwrap();
            writer.finish().unwrap();
        }
        assert_eq!(extract(cursor.get_ref()), "");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>C &amp; D</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(text_runs(xml).unwrap(), "C & D\n");
    }
}
