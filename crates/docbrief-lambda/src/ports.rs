//! Injected collaborators for the HTTP surface.
//!
//! Route handlers reach storage and the model through these traits rather
//! than concrete SDK clients, so the request pipeline can be exercised
//! against in-memory fakes.

use std::time::Duration;

use async_trait::async_trait;

use docbrief_bedrock::error::BedrockError;
use docbrief_bedrock::invoke::{self, GenerationConfig};
use docbrief_storage::error::StorageError;
use docbrief_storage::objects;

/// Object storage as the pipeline sees it: fetch stored document bytes,
/// issue time-limited upload URLs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn fetch_bytes(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    async fn issue_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError>;
}

/// Text generation behind the summarization pipeline.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn invoke(&self, prompt: &str) -> Result<String, BedrockError>;
}

/// S3-backed [`ObjectStore`].
pub struct S3Store {
    pub client: aws_sdk_s3::Client,
    pub bucket: String,
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn fetch_bytes(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        objects::get_object(&self.client, &self.bucket, key).await
    }

    async fn issue_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        objects::presign_put(&self.client, &self.bucket, key, Some(content_type), expires_in).await
    }
}

/// Bedrock-backed [`TextModel`] with fixed generation parameters.
pub struct BedrockModel {
    pub client: aws_sdk_bedrockruntime::Client,
    pub model_id: String,
    pub config: GenerationConfig,
}

#[async_trait]
impl TextModel for BedrockModel {
    async fn invoke(&self, prompt: &str) -> Result<String, BedrockError> {
        invoke::generate_text(&self.client, &self.model_id, prompt, &self.config).await
    }
}
