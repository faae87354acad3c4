//! HTTP image fetcher.
//!
//! Downloads with `reqwest` (redirects followed, per-request timeout) and
//! decodes on the blocking pool so the runtime threads stay free.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::images::{ImageFetcher, ImageLoadError, Thumbnail};

pub struct HttpImageFetcher {
    client: reqwest::Client,
    thumbnail_width: u32,
}

impl HttpImageFetcher {
    pub fn new(timeout: Duration, thumbnail_width: u32) -> Result<Self, ImageLoadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("wander/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ImageLoadError::Network(e.to_string()))?;
        Ok(Self {
            client,
            thumbnail_width,
        })
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, locator: &str) -> Result<Thumbnail, ImageLoadError> {
        let response = self
            .client
            .get(locator)
            .send()
            .await
            .map_err(|e| ImageLoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageLoadError::Http {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageLoadError::Network(e.to_string()))?;
        debug!("Fetched {} bytes from {}", bytes.len(), locator);

        let width = self.thumbnail_width;
        tokio::task::spawn_blocking(move || Thumbnail::decode(&bytes, width))
            .await
            .map_err(|e| ImageLoadError::Decode(e.to_string()))?
    }
}
