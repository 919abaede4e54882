pub mod health;
pub mod summarize;
pub mod upload;

use axum::Router;
use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::error::ApiError;
use crate::middleware;
use crate::state::AppState;

/// Empty 200 for CORS preflight requests.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// JSON 405 for unsupported methods on a known path.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// CORS policy applied to every response: the configured origin (`*`
/// allows any), the two methods the API serves, and JSON request bodies.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);
    Ok(if allowed_origin == "*" {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(allowed_origin.parse::<HeaderValue>()?)
    })
}

/// Assemble the application router.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/upload-url",
            post(upload::issue_upload_url)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/summarize",
            post(summarize::summarize)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
