//! HTTP client for the external song details service.

use super::{EnrichmentError, SongDetailsProvider};
use crate::song_store::SongDetails;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

pub struct EnrichmentClient {
    client: reqwest::Client,
    base_url: String,
}

impl EnrichmentClient {
    /// Create a new enrichment client.
    ///
    /// # Arguments
    /// * `base_url` - Endpoint of the details service (e.g., "http://localhost:8000/info")
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: String, timeout_sec: u64) -> Result<Self, EnrichmentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .map_err(EnrichmentError::Client)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn details_url(&self, group: &str, song: &str) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}group={}&song={}",
            self.base_url,
            separator,
            urlencoding::encode(group),
            urlencoding::encode(song)
        )
    }
}

#[async_trait]
impl SongDetailsProvider for EnrichmentClient {
    async fn fetch_song_details(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongDetails, EnrichmentError> {
        let url = self.details_url(group, song);
        debug!("Requesting song details from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(EnrichmentError::Request)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Enrichment service answered {} for {}", status, url);
            return Err(EnrichmentError::Status(status));
        }

        let body = response.bytes().await.map_err(EnrichmentError::Request)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
