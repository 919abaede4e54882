use serde::{Deserialize, Serialize};

/// Role lens used when a request does not name one.
pub const DEFAULT_ROLE: &str = "General";

/// Validated input to the summarization pipeline: which stored document to
/// read and the role lens the summary is written for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub document_key: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}
