//! HTTP Server for the ClearX enhancement endpoint.
//!
//! # API Endpoints
//!
//! | Method | Path              | Description                          |
//! |--------|-------------------|--------------------------------------|
//! | GET    | `/health`         | Health check                         |
//! | POST   | `/enhance`        | Multipart `file` → enhanced PNG      |
//!
//! When a static directory is configured, the built frontend is served
//! for every other path.

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::Value;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use uuid::Uuid;

use super::types::{error_response, HealthResponse};
use crate::config::ServerConfig;
use crate::enhance::{enhance_bytes, EnhanceOptions};
use crate::error::{ServerError, ServerResult};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub options: EnhanceOptions,
    pub max_upload_bytes: usize,
}

impl From<&ServerConfig> for AppState {
    fn from(config: &ServerConfig) -> Self {
        Self {
            options: config.enhance,
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}

/// Build the application router.
pub fn build_router(config: &ServerConfig) -> Router {
    // Permissive CORS: the page may be served from anywhere
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/enhance", post(enhance));

    app = match &config.static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app.route("/", get(health)),
    };

    app.layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors)
        .with_state(AppState::from(config))
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    log::info!("🚀 ClearX enhancement server running on http://localhost:{}", config.port);
    log::info!("   POST /enhance - Enhance an image (multipart field `file`)");
    log::info!("   GET  /health  - Health check");
    log::info!(
        "   scale x{}, upload limit {} bytes, output limit {} px",
        config.enhance.scale,
        config.max_upload_bytes,
        config.enhance.max_output_pixels
    );
    if let Some(dir) = &config.static_dir {
        log::info!("   serving frontend from {}", dir.display());
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new(&state.options, state.max_upload_bytes))
}

/// Enhance endpoint
async fn enhance(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let request_id = Uuid::new_v4();

    let reject = |e: ServerError| {
        log::error!("❌ [{}] {}", request_id, e);
        (e.status_code(), Json(error_response(&request_id, &e.to_string())))
    };

    // Not multipart at all (missing boundary, wrong content type)
    let multipart = multipart.map_err(|e| reject(ServerError::BadRequest(e.body_text())))?;

    let (file_name, bytes) = read_file_field(multipart).await.map_err(reject)?;
    log::info!(
        "📥 [{}] {} ({} bytes)",
        request_id,
        file_name.as_deref().unwrap_or("unknown"),
        bytes.len()
    );

    let options = state.options;
    let enhanced = tokio::task::spawn_blocking(move || enhance_bytes(&bytes, &options))
        .await
        .map_err(|e| reject(ServerError::Internal(format!("worker failed: {}", e))))?
        .map_err(|e| reject(e.into()))?;

    log::info!(
        "✅ [{}] {}x{} → {}x{} ({} bytes)",
        request_id,
        enhanced.source_width,
        enhanced.source_height,
        enhanced.width,
        enhanced.height,
        enhanced.png.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::HeaderName::from_static("x-request-id"), request_id.to_string()),
        ],
        enhanced.png,
    )
        .into_response())
}

/// Pull the `file` field out of the multipart body.
async fn read_file_field(mut multipart: Multipart) -> ServerResult<(Option<String>, Vec<u8>)> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| ServerError::Upload {
        status: e.status(),
        message: e.body_text(),
    })? {
        if field.name() == Some("file") {
            file_name = field.file_name().map(|s| s.to_string());
            let data = field.bytes().await.map_err(|e| ServerError::Upload {
                status: e.status(),
                message: e.body_text(),
            })?;
            file_data = Some(data.to_vec());
        }
    }

    let bytes = file_data.ok_or_else(|| ServerError::BadRequest("No file provided".into()))?;
    Ok((file_name, bytes))
}
