use crate::errors::AppError;

/// Extracts plain text from an in-memory PDF.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("Failed to extract text from PDF: {e}")))
}
