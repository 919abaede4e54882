use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 presign error: {0}")]
    Presign(String),
}
