use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message,
};
use tracing::info;
use uuid::Uuid;

use crate::error::BedrockError;

/// Generation parameters for a model invocation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_tokens: i32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

/// Invoke a model once with a single user prompt and return its raw text
/// output.
///
/// One attempt per call; there is no retry policy. Transport and
/// model-side failures surface as [`BedrockError::Invocation`] carrying
/// the service error's message.
pub async fn generate_text(
    client: &Client,
    model_id: &str,
    prompt: &str,
    config: &GenerationConfig,
) -> Result<String, BedrockError> {
    let invocation_id = Uuid::new_v4();
    info!(
        invocation_id = %invocation_id,
        model = model_id,
        prompt_len = prompt.len(),
        "invoking model"
    );

    let inference_config = InferenceConfiguration::builder()
        .temperature(config.temperature)
        .max_tokens(config.max_tokens)
        .build();

    let response = client
        .converse()
        .model_id(model_id)
        .inference_config(inference_config)
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(prompt.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    info!(
        invocation_id = %invocation_id,
        response_len = response_text.len(),
        "model invocation complete"
    );

    Ok(response_text)
}
