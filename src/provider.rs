// Client for the external background-removal provider.
//
// The outbound HTTP call sits behind the `BackgroundRemover` trait so the web
// handlers only see an injected implementation; tests substitute a stub
// without touching the network.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart;
use tracing::debug;
use url::Url;

/// Endpoint of the hosted remove.bg API, used unless overridden.
pub const DEFAULT_PROVIDER_URL: &str = "https://api.remove.bg/v1.0/removebg";

/// Multipart field the provider expects the image bytes under.
const PROVIDER_IMAGE_FIELD: &str = "image_file";

/// Output sizing field sent with every request. "auto" lets the provider pick
/// the best resolution for the account tier.
const PROVIDER_SIZE_FIELD: &str = "size";
const PROVIDER_SIZE_AUTO: &str = "auto";

/// Header carrying the API credential.
const PROVIDER_API_KEY_HEADER: &str = "X-Api-Key";

/// One image as received from the browser: the raw bytes plus the media type
/// and filename the client declared for them.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub data: Bytes,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

/// Errors from the provider client.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// No API credential is configured. Checked before any socket work, so a
    /// misconfigured server never sends upload bytes anywhere.
    #[error("no provider API key configured")]
    MissingCredential,

    /// The provider answered with a non-success status. The response body is
    /// carried for server-side logging and must not reach a client response.
    #[error("provider returned status {status}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request could not be completed (connect, TLS, read, ...).
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A trait for submitting an image to a background-removal service and
/// getting the processed PNG back. In practice this is an HTTP call to a
/// remove.bg-compatible API via `reqwest`; see `RemoveBgClient`.
#[async_trait]
pub trait BackgroundRemover: Send + Sync {
    async fn remove_background(&self, upload: UploadedImage) -> Result<Bytes, ProviderError>;
}

/// Configuration for `RemoveBgClient`, injected at construction time rather
/// than read from the environment on each request.
#[derive(Debug, Clone)]
pub struct RemoveBgConfig {
    pub endpoint: Url,
    /// May be absent: the server still starts, but every removal request
    /// fails with `ProviderError::MissingCredential` until a key is set.
    pub api_key: Option<String>,
}

/// The concrete implementation of `BackgroundRemover`.
pub struct RemoveBgClient {
    client: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl RemoveBgClient {
    pub fn new(config: RemoveBgConfig) -> Self {
        // Client defaults only: the relay applies no timeout override and no
        // retry policy. A slow provider surfaces as a slow request.
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint,
            api_key: config.api_key,
        }
    }

    fn build_form(upload: UploadedImage) -> Result<multipart::Form, reqwest::Error> {
        let mut image_part = multipart::Part::stream(upload.data);

        if let Some(file_name) = upload.file_name {
            image_part = image_part.file_name(file_name);
        }

        // Forward the declared media type only when it parses as a MIME type;
        // a bogus value is dropped and the provider sniffs the bytes instead.
        if let Some(content_type) = upload.content_type {
            if content_type.parse::<mime::Mime>().is_ok() {
                image_part = image_part.mime_str(&content_type)?;
            } else {
                debug!("Ignoring unparseable upload content type: {:?}", content_type);
            }
        }

        Ok(multipart::Form::new()
            .part(PROVIDER_IMAGE_FIELD, image_part)
            .text(PROVIDER_SIZE_FIELD, PROVIDER_SIZE_AUTO))
    }
}

#[async_trait]
impl BackgroundRemover for RemoveBgClient {
    async fn remove_background(&self, upload: UploadedImage) -> Result<Bytes, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential)?;

        debug!(
            "Submitting {} byte(s) to provider at {}",
            upload.data.len(),
            self.endpoint
        );

        let form = Self::build_form(upload)?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(PROVIDER_API_KEY_HEADER, api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Rejected { status, body });
        }

        Ok(response.bytes().await?)
    }
}
