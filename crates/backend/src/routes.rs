use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::AppState;

/// Full application router: the three API routes, the static file
/// fallback and the shared layers.
pub fn configure_routes(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/api/models", get(handlers::models::list))
        .route("/api/chat", post(handlers::chat::send))
        .route("/api/health", get(handlers::health::check))
        .with_state(state)
        // Everything outside /api is served from the built web client
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

// Logs method, path, status, latency and body size for every request.
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    use axum::body::to_bytes;

    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Read the response body to learn its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(_) => {
            tracing::warn!(
                "{} {} -> {} in {}ms (unreadable body)",
                method,
                uri.path(),
                parts.status.as_u16(),
                start.elapsed().as_millis()
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    tracing::info!(
        "{} {} -> {} in {}ms ({} bytes)",
        method,
        uri.path(),
        parts.status.as_u16(),
        start.elapsed().as_millis(),
        bytes.len()
    );

    Response::from_parts(parts, Body::from(bytes))
}
