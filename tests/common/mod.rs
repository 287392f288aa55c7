//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestServer, TestClient, KNOWN_GROUP, KNOWN_SONG};
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_add_song() {
//!     let server = TestServer::spawn().await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.add_song(KNOWN_GROUP, KNOWN_SONG).await;
//!     assert_eq!(response.status(), StatusCode::CREATED);
//! }
//! ```

mod client;
mod constants;
mod details_service;
mod server;

pub use client::TestClient;
pub use constants::*;
pub use server::TestServer;
