// Response models for the relay API

use serde::{Deserialize, Serialize};

/// Successful background removal result.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RemoveBackgroundResponse {
    /// The processed image as a `data:image/png;base64,...` URL, usable
    /// directly as an image source or download target.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
