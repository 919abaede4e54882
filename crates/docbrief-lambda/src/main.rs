use std::env;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod ports;
mod routes;
mod state;

use docbrief_bedrock::invoke::GenerationConfig;
use ports::{BedrockModel, S3Store};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("DOCBRIEF_BUCKET").unwrap_or_else(|_| "docbrief".to_string());
    let model_id = env::var("DOCBRIEF_MODEL_ID")
        .unwrap_or_else(|_| "amazon.titan-text-express-v1".to_string());
    let allowed_origin = env::var("DOCBRIEF_ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_string());

    let s3 = docbrief_storage::client::build_client().await;
    let bedrock = docbrief_bedrock::client::build_client().await;

    let state = AppState {
        store: Arc::new(S3Store { client: s3, bucket }),
        model: Arc::new(BedrockModel {
            client: bedrock,
            model_id,
            config: GenerationConfig::default(),
        }),
    };

    let cors = routes::cors_layer(&allowed_origin)?;
    let app = routes::router(state, cors);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
