//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own database file and its own
//! song details service.

use super::constants::*;
use super::details_service::spawn_details_service;
use song_library_server::server::state::{GuardedDetailsProvider, GuardedSongStore};
use song_library_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use song_library_server::song_store::SONG_VERSIONED_SCHEMAS;
use song_library_server::sqlite_persistence::{DatabaseLocation, SqliteDatabase};
use song_library_server::{EnrichmentClient, SqliteSongStore};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// When dropped, the server and the details service shut down and the
/// database directory is removed.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// Store backing the server, for direct checks in tests
    pub song_store: GuardedSongStore,

    _temp_db_dir: TempDir,
    _shutdown_txs: Vec<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn spawn() -> Self {
        let temp_db_dir = TempDir::new().expect("Failed to create temp dir");
        let location = DatabaseLocation::File(temp_db_dir.path().join("songs.db"));
        let db = SqliteDatabase::open(&location, SONG_VERSIONED_SCHEMAS)
            .expect("Failed to open database");
        let song_store: GuardedSongStore =
            Arc::new(SqliteSongStore::new(db).expect("Failed to create song store"));

        let (details_shutdown_tx, details_shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let details_url = spawn_details_service(details_shutdown_rx).await;
        let details_provider: GuardedDetailsProvider = Arc::new(
            EnrichmentClient::new(details_url, REQUEST_TIMEOUT_SECS)
                .expect("Failed to create enrichment client"),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            request_timeout_sec: REQUEST_TIMEOUT_SECS,
        };
        let app = make_app(config, song_store.clone(), details_provider);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            song_store,
            _temp_db_dir: temp_db_dir,
            _shutdown_txs: vec![shutdown_tx, details_shutdown_tx],
        };
        server.wait_for_ready().await;
        server
    }

    /// Polls the stats endpoint until the server answers.
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        for tx in self._shutdown_txs.drain(..) {
            let _ = tx.send(());
        }
    }
}
