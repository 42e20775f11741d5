use super::{MAX_UPLOAD_BODY_SIZE_BYTES, SharedRemover, handlers, static_assets};
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::Level;

pub fn create_app(remover: SharedRemover) -> Router {
    // Configure the router: one API endpoint plus the embedded client UI
    Router::new()
        .route("/api/remove-bg", post(handlers::remove_background))
        // Everything else resolves against the bundled UI files
        .fallback(static_assets::serve_embedded_asset)
        // Apply a layer to limit the maximum size of request bodies.
        // The client's 50MB file ceiling plus multipart envelope headroom.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_SIZE_BYTES))
        // Add CORS layer for broader client compatibility
        .layer(CorsLayer::permissive())
        // Add tracing for HTTP requests and responses
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().level(Level::INFO)))
        .with_state(remover)
}
