//! docbrief-extract
//!
//! Local document text extraction. Plain text and PDF.

pub mod error;
pub mod pdf;

use tracing::info;

use error::ExtractError;

/// Document formats with a local extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Text,
    Pdf,
}

/// Map a storage key's file extension to a [`DocumentFormat`].
///
/// Matching is case-insensitive. Returns `None` for keys without a
/// recognized extension.
pub fn document_format_for_key(key: &str) -> Option<DocumentFormat> {
    let (_, ext) = key.rsplit_once('.')?;
    match ext.to_lowercase().as_str() {
        "txt" => Some(DocumentFormat::Text),
        "pdf" => Some(DocumentFormat::Pdf),
        _ => None,
    }
}

/// Extract clean text from raw document bytes.
///
/// Plain text is decoded as strict UTF-8; invalid byte sequences fail
/// rather than being silently substituted. PDF extraction walks pages in
/// order, skipping pages that yield no text.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Text => Ok(String::from_utf8(bytes.to_vec())?),
        DocumentFormat::Pdf => pdf::extract_pdf_text(bytes),
    }
}

/// Extract text from document bytes stored under `key`, deriving the
/// format from the key's extension.
pub fn extract_from_key(key: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let format = document_format_for_key(key)
        .ok_or_else(|| ExtractError::UnsupportedFormat(key.to_string()))?;
    let text = extract_text(bytes, format)?;
    info!(key, text_len = text.len(), "document text extracted");
    Ok(text)
}
