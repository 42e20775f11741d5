// Encoding of processed images as data URLs

use base64::prelude::{BASE64_STANDARD, Engine as _};

/// Wraps processed PNG bytes in a `data:` URL.
///
/// The result is self-contained: the client can assign it to an `<img>`
/// source or a download link without any further request to the server.
pub fn png_data_url(png_bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64_STANDARD.encode(png_bytes))
}
