use std::time::Duration;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use docbrief_core::error::CoreError;
use docbrief_core::models::grant::UploadGrant;
use docbrief_core::s3_keys;

use crate::error::ApiError;
use crate::state::AppState;

/// Presigned upload URLs are valid for one hour.
const UPLOAD_URL_TTL: Duration = Duration::from_secs(3600);

/// Content type recorded when the caller does not declare one.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Issue a presigned PUT URL for a document upload.
///
/// The storage key is `uploads/<fileName>` with the name used verbatim.
/// Any issuance failure, including a missing file name, is a 400.
pub async fn issue_upload_url(
    State(state): State<AppState>,
    Json(req): Json<UploadUrlRequest>,
) -> Result<Json<UploadGrant>, ApiError> {
    let file_name = req
        .file_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest(CoreError::MissingField("fileName".to_string()).to_string())
        })?;
    let content_type = req.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE);

    let key = s3_keys::upload(file_name);
    let url = state
        .store
        .issue_url(&key, content_type, UPLOAD_URL_TTL)
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(Json(UploadGrant { url, key }))
}
