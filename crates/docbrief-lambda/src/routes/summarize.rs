use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use docbrief_core::error::CoreError;
use docbrief_core::models::request::{DEFAULT_ROLE, SummaryRequest};
use docbrief_core::models::summary::SummaryRecord;
use docbrief_core::{normalize, prompt};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeBody {
    #[serde(default)]
    pub file_key: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Summarize a stored document through the requested role lens.
///
/// Straight-line pipeline: fetch bytes, extract text, build the prompt,
/// invoke the model, normalize its output. A failure at any stage is a 500
/// carrying that stage's error message; normalization itself cannot fail.
pub async fn summarize(
    State(state): State<AppState>,
    Json(body): Json<SummarizeBody>,
) -> Result<Json<SummaryRecord>, ApiError> {
    let document_key = body.file_key.ok_or_else(|| {
        ApiError::Internal(CoreError::MissingField("fileKey".to_string()).to_string())
    })?;
    let request = SummaryRequest {
        document_key,
        role: body.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
    };

    let bytes = state.store.fetch_bytes(&request.document_key).await?;
    let text = docbrief_extract::extract_from_key(&request.document_key, &bytes)?;

    let prompt = prompt::build_prompt(&text, &request.role);
    let raw = state.model.invoke(&prompt).await?;

    Ok(Json(normalize::normalize(&raw)))
}
