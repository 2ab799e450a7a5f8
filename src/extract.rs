use crate::error::{AppError, Result};

/// Extracts plain text from a PDF held fully in memory.
/// Thin wrapper over the `pdf-extract` crate; text layout and encoding
/// quirks are the library's concern, not ours.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::ExtractionError(e.to_string()))
}
