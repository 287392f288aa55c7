//! In-process stand-in for the external song details service.

use super::constants::*;
use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Deserialize)]
struct InfoQuery {
    group: String,
    song: String,
}

async fn info(Query(query): Query<InfoQuery>) -> Result<Json<Value>, StatusCode> {
    if query.group == UNKNOWN_GROUP {
        return Err(StatusCode::NOT_FOUND);
    }
    if query.group == KNOWN_GROUP && query.song == KNOWN_SONG {
        return Ok(Json(json!({
            "release_date": KNOWN_RELEASE_DATE,
            "text": KNOWN_TEXT,
            "link": KNOWN_LINK,
        })));
    }
    Ok(Json(json!({
        "release_date": "01.01.2000",
        "text": format!("{} by {}\n\nsecond verse", query.song, query.group),
        "link": "https://example.com",
    })))
}

/// Spawns the service and returns the full URL of its info endpoint.
pub async fn spawn_details_service(
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind details service");
    let port = listener
        .local_addr()
        .expect("Failed to get local address")
        .port();

    let app = Router::new().route("/info", get(info));
    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .expect("Details service failed");
    });

    format!("http://127.0.0.1:{}/info", port)
}
