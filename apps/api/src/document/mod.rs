//! Resume text extraction. The analysis core has no file-format awareness;
//! everything here turns an uploaded PDF or DOCX into one normalized,
//! lower-cased string before the core ever sees it.

pub mod docx;
pub mod normalize;
pub mod pdf;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detects the upload format from the multipart content type, falling
    /// back to the file extension.
    pub fn detect(filename: Option<&str>, content_type: Option<&str>) -> Option<Self> {
        match content_type {
            Some("application/pdf") => return Some(Self::Pdf),
            Some(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                | "application/msword",
            ) => return Some(Self::Docx),
            _ => {}
        }

        let filename = filename?.to_lowercase();
        if filename.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if filename.ends_with(".docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }
}

/// Extracts and normalizes resume text from an uploaded document.
pub fn extract_text(format: DocumentFormat, bytes: &[u8]) -> Result<String, AppError> {
    let raw = match format {
        DocumentFormat::Pdf => pdf::extract_text(bytes)?,
        DocumentFormat::Docx => docx::extract_text(bytes)?,
    };
    Ok(normalize::normalize(&raw))
}
