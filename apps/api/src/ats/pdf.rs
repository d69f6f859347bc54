//! Resume PDF handling — type sniffing and text extraction.

use crate::errors::AppError;

/// Accepts a `application/pdf` content type (case-insensitive) or the `%PDF-`
/// magic at the start of the body. Uploads from browsers occasionally arrive
/// with a generic content type, so the magic check supplements the MIME check.
pub fn is_pdf(content_type: Option<&str>, head: &[u8]) -> bool {
    let ct = content_type.unwrap_or("").to_ascii_lowercase();
    ct.contains("application/pdf") || head.starts_with(b"%PDF-")
}

/// Extracts concatenated page text from an uploaded resume.
///
/// Rejects non-PDF uploads before touching the parser; fails when the document
/// cannot be parsed or yields no usable text (empty or image-only PDFs).
pub fn extract_resume_text(content_type: Option<&str>, data: &[u8]) -> Result<String, AppError> {
    if !is_pdf(content_type, data) {
        return Err(AppError::UnsupportedFileType(
            "Please upload a PDF file".to_string(),
        ));
    }

    let text = pdf_extract::extract_text_from_mem(data).map_err(|e| {
        AppError::PdfExtraction(format!("Failed to parse the PDF file: {e}"))
    })?;

    if text.trim().is_empty() {
        return Err(AppError::PdfExtraction(
            "Could not extract text from the PDF. The file might be empty or image-based"
                .to_string(),
        ));
    }

    Ok(text)
}
