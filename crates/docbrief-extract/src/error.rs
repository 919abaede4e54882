use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type: {0} (only .txt and .pdf are supported)")]
    UnsupportedFormat(String),

    #[error("invalid UTF-8 in text document: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    #[error("PDF parse error: {0}")]
    PdfParse(String),
}
