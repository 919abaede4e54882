use serde::{Deserialize, Serialize};

/// A short-lived presigned upload URL and the storage key it writes to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadGrant {
    pub url: String,
    pub key: String,
}
