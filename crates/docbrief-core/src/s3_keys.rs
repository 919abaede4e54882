//! S3 key conventions.
//!
//! Pure string functions, no AWS SDK dependency. These define the canonical
//! layout of objects in the docbrief S3 bucket.

/// Key for an uploaded document. File names are caller-supplied and used
/// verbatim; there is no sanitization or collision handling.
pub fn upload(file_name: &str) -> String {
    format!("uploads/{file_name}")
}

pub const UPLOADS_PREFIX: &str = "uploads/";
