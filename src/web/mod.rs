// Web server module for the relay
// Handles the HTTP API endpoint and serves the embedded client UI

mod app;
mod data_url;
mod error;
mod extract_upload;
mod handlers;
mod models;
mod static_assets;

pub use app::create_app;

use crate::provider::BackgroundRemover;
use std::sync::Arc;

// Maximum file size the client admits
pub const MAX_UPLOAD_SIZE_BYTES: usize = 50 * 1024 * 1024; // 50MB

// Request body limit: the file ceiling plus headroom for the multipart
// boundary and part headers, so a file at exactly 50MB still fits.
pub const MAX_UPLOAD_BODY_SIZE_BYTES: usize = MAX_UPLOAD_SIZE_BYTES + 64 * 1024;

pub type SharedRemover = Arc<dyn BackgroundRemover>;
