use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Extension, Router,
};
use hyper::Server;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::app::process_use_case::ProcessUseCase;

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "contact-scrubber",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Trigger endpoint: runs the whole batch synchronously and reports either
/// the archived file id or a single failure message.
async fn process(Extension(use_case): Extension<Arc<ProcessUseCase>>) -> impl IntoResponse {
    match use_case.execute().await {
        Ok(file_id) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": format!("File archived with ID: {file_id}")
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "processing run failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Create the HTTP server with the trigger and health routes
pub fn create_server(use_case: Arc<ProcessUseCase>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/process", post(process))
        .layer(Extension(use_case))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the specified port
pub async fn start_server(
    use_case: Arc<ProcessUseCase>,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_server(use_case);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    println!("🚀 HTTP server running on http://localhost:{port}");
    println!("💚 Health check: http://localhost:{port}/health");
    println!("🧹 Trigger:      POST http://localhost:{port}/process");

    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}
