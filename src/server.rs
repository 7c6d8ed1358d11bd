//! HTTP surface: generation endpoint, CORS preflight, catalogue and health.

use crate::app::App;
use crate::enrich::{catalogue, Catalogue};
use crate::models::{ErrorBody, GenerationRequest, GenerationResult};
use crate::{Error, Result};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderName, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<App>,
}

impl AppState {
    pub fn new(app: App) -> Self {
        Self { app: Arc::new(app) }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.client_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Preflight answers come straight from this layer and never reach a
/// handler. Every other response gets `Access-Control-Allow-Origin: *`.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", post(generate_image_handler))
        .route("/generate-image", post(generate_image_handler))
        .route("/styles", get(styles_handler))
        .route("/health", get(health_handler))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /generate-image
///
/// The body is decoded here rather than through the `Json` extractor so a
/// malformed body yields this service's `{ error }` shape.
async fn generate_image_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerationResult>> {
    let request: GenerationRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("Error in generate-image handler: {}", e);
        Error::MalformedRequest(e.to_string())
    })?;

    state.app.generate(request).await.map(Json)
}

async fn styles_handler() -> Json<Catalogue> {
    Json(catalogue())
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, bind_addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, create_app(state)).await?;
    Ok(())
}
