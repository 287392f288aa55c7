use anyhow::{Context, Result};
use std::time::{Duration, Instant};

use axum::{
    extract::State, middleware, response::IntoResponse, routing::get, Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tracing::{info, warn};

use super::{log_requests, make_songs_routes, state::*, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub songs_count: Option<usize>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let songs_count = match state.song_store.count_songs() {
        Ok(count) => Some(count),
        Err(err) => {
            warn!("Could not count songs: {}", err);
            None
        }
    };
    Json(ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        songs_count,
    })
}

pub fn make_app(
    config: ServerConfig,
    song_store: GuardedSongStore,
    details_provider: GuardedDetailsProvider,
) -> Router {
    let state = ServerState {
        config: config.clone(),
        start_time: Instant::now(),
        song_store,
        details_provider,
        hash: env!("GIT_HASH").to_string(),
    };

    let home_router: Router = Router::new()
        .route("/", get(home))
        .with_state(state.clone());

    home_router
        .nest("/songs", make_songs_routes(state.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.request_timeout_sec,
                )))
                .layer(middleware::from_fn_with_state(state, log_requests)),
        )
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections...");
}

pub async fn run_server(
    config: ServerConfig,
    song_store: GuardedSongStore,
    details_provider: GuardedDetailsProvider,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, song_store, details_provider);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    info!("Ready to serve at port {}!", port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
