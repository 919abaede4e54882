use serde::{Deserialize, Serialize};

/// The fixed-shape structured output of a summarization request.
///
/// Every field is always present and correctly shaped. A failed or partial
/// parse of the model's output degrades to empty strings and sequences,
/// never to a missing field or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(default)]
    pub summary: String,
    /// Expected values are `"Positive"`, `"Neutral"`, `"Negative"`; free
    /// text from the model is tolerated.
    #[serde(default = "default_sentiment")]
    pub sentiment: String,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
}

fn default_sentiment() -> String {
    "Neutral".to_string()
}

impl Default for SummaryRecord {
    fn default() -> Self {
        Self {
            summary: String::new(),
            sentiment: default_sentiment(),
            insights: Vec::new(),
            actions: Vec::new(),
            risks: Vec::new(),
        }
    }
}
