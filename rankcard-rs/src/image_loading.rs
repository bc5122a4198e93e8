//! Fetching and decoding avatar and badge images.

use crate::error::CardError;
use base64::Engine;
use log::{error, info};
use rankcard_canvas::CanvasImage;
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Duration;
use url::Url;

static RANKCARD_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

lazy_static! {
    static ref REQWEST_CLIENT: Client = reqwest::ClientBuilder::new()
        .user_agent(RANKCARD_USER_AGENT)
        .build()
        .expect("Failed to construct reqwest client");
}

/// Resolves a URL to a decoded image.
///
/// Implementations fail the whole render on error; nothing is retried.
pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<CanvasImage, CardError>> + Send;
}

/// Loads `http(s)://`, `file://`, and base64 `data:` URLs.
#[derive(Debug, Clone, Default)]
pub struct HttpImageFetcher {
    timeout: Option<Duration>,
}

impl HttpImageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort HTTP requests that take longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, CardError> {
        match url.scheme() {
            "http" | "https" => self.fetch_http(url).await,
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| fetch_error(url, "invalid file URL path"))?;
                tokio::fs::read(&path)
                    .await
                    .map_err(|err| fetch_error(url, err))
            }
            "data" => decode_data_url(url),
            scheme => Err(fetch_error(url, format!("unsupported URL scheme {scheme:?}"))),
        }
    }

    async fn fetch_http(&self, url: &Url) -> Result<Vec<u8>, CardError> {
        let mut request = REQWEST_CLIENT.get(url.clone());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await.map_err(|err| fetch_error(url, err))?;

        match response.status() {
            StatusCode::OK => {
                let bytes = response.bytes().await.map_err(|err| fetch_error(url, err))?;
                Ok(bytes.to_vec())
            }
            status => {
                error!("Failed to load image from url {} with status code {:?}", url, status);
                Err(fetch_error(url, format!("unexpected status {status}")))
            }
        }
    }
}

impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &Url) -> Result<CanvasImage, CardError> {
        info!("Resolving image: {url}");
        let bytes = self.fetch_bytes(url).await?;
        decode_image(url, &bytes)
    }
}

fn fetch_error(url: &Url, message: impl ToString) -> CardError {
    CardError::Fetch {
        url: url.to_string(),
        message: message.to_string(),
    }
}

/// Payload of a `data:<mime>;base64,<payload>` URL.
fn decode_data_url(url: &Url) -> Result<Vec<u8>, CardError> {
    let Some((meta, payload)) = url.path().split_once(',') else {
        return Err(fetch_error(url, "malformed data URL"));
    };
    if !meta.ends_with(";base64") {
        return Err(fetch_error(url, "only base64 data URLs are supported"));
    }
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|err| fetch_error(url, err))
}

/// Decode PNG, JPEG, GIF (first frame), or WebP bytes into a drawable image.
pub fn decode_image(url: &Url, bytes: &[u8]) -> Result<CanvasImage, CardError> {
    let decoded = image::load_from_memory(bytes).map_err(|err| CardError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(CanvasImage::from_rgba8(width, height, rgba.into_raw())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[tokio::test]
    async fn test_fetch_data_url() {
        let encoded = base64::engine::general_purpose::STANDARD.encode(png_bytes(3, 2));
        let url = Url::parse(&format!("data:image/png;base64,{encoded}")).unwrap();
        let image = HttpImageFetcher::new().fetch(&url).await.unwrap();
        assert_eq!((image.width(), image.height()), (3, 2));
    }

    #[tokio::test]
    async fn test_fetch_file_url() {
        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        std::fs::write(file.path(), png_bytes(4, 4)).unwrap();
        let url = Url::from_file_path(file.path()).unwrap();

        let image = HttpImageFetcher::new().fetch(&url).await.unwrap();
        assert_eq!((image.width(), image.height()), (4, 4));
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let url = Url::from_file_path(dir.path().join("missing.png")).unwrap();
        let err = HttpImageFetcher::new().fetch(&url).await.unwrap_err();
        assert!(matches!(err, CardError::Fetch { .. }));
    }

    #[tokio::test]
    async fn test_unsupported_scheme() {
        let url = Url::parse("ftp://example.com/avatar.png").unwrap();
        let err = HttpImageFetcher::new().fetch(&url).await.unwrap_err();
        assert!(matches!(err, CardError::Fetch { .. }));
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let url = Url::parse("https://example.com/a.png").unwrap();
        let err = decode_image(&url, b"definitely not an image").unwrap_err();
        assert!(matches!(err, CardError::Decode { .. }));
    }

    #[test]
    fn test_plain_data_url_rejected() {
        let url = Url::parse("data:text/plain,hello").unwrap();
        assert!(matches!(decode_data_url(&url), Err(CardError::Fetch { .. })));
    }
}
