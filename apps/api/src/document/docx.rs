use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::AppError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts plain text from an in-memory DOCX. A DOCX is a zip container; the
/// body lives in `word/document.xml` as WordprocessingML. Text runs are
/// concatenated, with paragraph and line-break elements becoming spaces.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::Extraction(format!("Failed to open DOCX container: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| AppError::Extraction(format!("DOCX has no {DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| AppError::Extraction(format!("Failed to read {DOCUMENT_PART}: {e}")))?;

    document_xml_to_text(&xml)
}

fn document_xml_to_text(xml: &str) -> Result<String, AppError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => {
                let piece = t
                    .unescape()
                    .map_err(|e| AppError::Extraction(format!("Invalid DOCX text run: {e}")))?;
                text.push_str(&piece);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => text.push(' '),
            Ok(Event::Empty(e)) if matches!(e.name().as_ref(), b"w:br" | b"w:tab") => {
                text.push(' ')
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(AppError::Extraction(format!(
                    "Failed to parse {DOCUMENT_PART}: {e}"
                )))
            }
        }
    }

    Ok(text)
}
