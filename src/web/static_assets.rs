// Embedded client UI and the handler that serves it

use axum::{
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use tracing::debug;

/// Client UI files bundled into the binary at compile time. The server has no
/// runtime dependency on an asset directory.
#[derive(RustEmbed)]
#[folder = "static/"]
pub struct Assets;

/// Serves an embedded asset, falling back to `index.html` so the root path
/// and any stray client-side route land on the app shell.
pub async fn serve_embedded_asset(uri: Uri) -> Response {
    let mut path = uri.path().trim_start_matches('/');

    // If path is empty or ends with /, serve index.html
    if path.is_empty() || path.ends_with('/') {
        path = "index.html";
    }

    if let Some(content) = Assets::get(path) {
        return asset_response(path, content);
    }

    debug!("No asset for {:?}, serving index.html", path);
    match Assets::get("index.html") {
        Some(index) => asset_response("index.html", index),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn asset_response(path: &str, content: rust_embed::EmbeddedFile) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    // Nothing here is content-hashed, so every asset revalidates. Keeps the
    // UI in step with the binary across upgrades.
    (
        [
            (header::CONTENT_TYPE, mime.as_ref()),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        content.data.into_owned(),
    )
        .into_response()
}
