//! HTTP client for end-to-end tests
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Stats
    // ========================================================================

    pub async fn get_stats(&self) -> Response {
        self.client
            .get(self.url("/"))
            .send()
            .await
            .expect("Stats request failed")
    }

    // ========================================================================
    // Songs
    // ========================================================================

    /// Lists songs, `query` pairs are sent as given so tests can pass
    /// malformed values.
    pub async fn list_songs(&self, query: &[(&str, &str)]) -> Response {
        self.client
            .get(self.url("/songs"))
            .query(query)
            .send()
            .await
            .expect("List songs request failed")
    }

    pub async fn get_song(&self, id: i64) -> Response {
        self.client
            .get(self.url(&format!("/songs/{}", id)))
            .send()
            .await
            .expect("Get song request failed")
    }

    pub async fn get_song_text(&self, id: &str, query: &[(&str, &str)]) -> Response {
        self.client
            .get(self.url(&format!("/songs/{}/text", id)))
            .query(query)
            .send()
            .await
            .expect("Get song text request failed")
    }

    pub async fn add_song(&self, group: &str, song: &str) -> Response {
        self.add_song_raw(json!({ "group_name": group, "song_name": song }))
            .await
    }

    pub async fn add_song_raw(&self, body: Value) -> Response {
        self.client
            .post(self.url("/songs"))
            .json(&body)
            .send()
            .await
            .expect("Add song request failed")
    }

    /// Adds a song and returns its id, panicking if that fails.
    pub async fn add_song_id(&self, group: &str, song: &str) -> i64 {
        let response = self.add_song(group, song).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        let body: Value = response.json().await.expect("Invalid add song response");
        body["id"].as_i64().expect("Missing song id")
    }

    pub async fn update_song(&self, id: &str, body: Value) -> Response {
        self.client
            .put(self.url(&format!("/songs/{}", id)))
            .json(&body)
            .send()
            .await
            .expect("Update song request failed")
    }

    pub async fn delete_song(&self, id: &str) -> Response {
        self.client
            .delete(self.url(&format!("/songs/{}", id)))
            .send()
            .await
            .expect("Delete song request failed")
    }
}
