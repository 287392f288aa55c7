//! Lookup of release date, lyrics and link for songs being added.

mod client;

pub use client::EnrichmentClient;

use crate::song_store::SongDetails;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to reach enrichment service: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Enrichment service responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to decode enrichment response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of [`SongDetails`] for a group/song pair.
#[async_trait]
pub trait SongDetailsProvider: Send + Sync {
    async fn fetch_song_details(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongDetails, EnrichmentError>;
}
