//! Routes under `/songs`.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::{debug, info};

use super::error::ApiError;
use super::params::{parse_song_id, ListSongsQuery, SongTextQuery};
use super::state::{GuardedDetailsProvider, GuardedSongStore, ServerState};
use crate::lyrics::paginate_verses;
use crate::song_store::{NewSong, Song, SongId, SongUpdate};

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<SongId>,
}

impl MessageResponse {
    fn new(message: &'static str) -> Self {
        Self { message, id: None }
    }
}

fn invalid_body(rejection: JsonRejection) -> ApiError {
    debug!("Invalid request body: {}", rejection.body_text());
    ApiError::Validation("Invalid request body".to_string())
}

async fn get_songs(
    State(store): State<GuardedSongStore>,
    Query(query): Query<ListSongsQuery>,
) -> Result<Json<Vec<Song>>, ApiError> {
    let filter = query.into_filter()?;
    let songs = store
        .fetch_songs(&filter)
        .map_err(ApiError::storage("Failed to fetch songs"))?;
    Ok(Json(songs))
}

async fn get_song(
    State(store): State<GuardedSongStore>,
    Path(id): Path<String>,
) -> Result<Json<Song>, ApiError> {
    let id = parse_song_id(&id)?;
    let song = store
        .fetch_song(id)
        .map_err(ApiError::storage("Failed to fetch song"))?;
    Ok(Json(song))
}

async fn get_song_text(
    State(store): State<GuardedSongStore>,
    Path(id): Path<String>,
    Query(query): Query<SongTextQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let id = parse_song_id(&id)?;
    let page = query.into_page()?;
    let text = store
        .fetch_song_text(id)
        .map_err(ApiError::storage("Failed to fetch song text"))?;
    Ok(Json(paginate_verses(&text, page.page, page.limit)))
}

async fn add_song(
    State(store): State<GuardedSongStore>,
    State(details_provider): State<GuardedDetailsProvider>,
    body: Result<Json<NewSong>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(song) = body.map_err(invalid_body)?;
    if song.group_name.trim().is_empty() || song.song_name.trim().is_empty() {
        return Err(ApiError::Validation(
            "group_name and song_name are required".to_string(),
        ));
    }

    let details = details_provider
        .fetch_song_details(&song.group_name, &song.song_name)
        .await
        .map_err(ApiError::enrichment("Failed to fetch song details"))?;

    let id = store
        .save_song(&song, &details)
        .map_err(ApiError::storage("Failed to save song"))?;
    info!(
        "Added song {} \"{}\" by \"{}\"",
        id, song.song_name, song.group_name
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Song added successfully",
            id: Some(id),
        }),
    ))
}

async fn update_song(
    State(store): State<GuardedSongStore>,
    Path(id): Path<String>,
    body: Result<Json<SongUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_song_id(&id)?;
    let Json(song) = body.map_err(invalid_body)?;
    store
        .update_song(id, &song)
        .map_err(ApiError::storage("Failed to update song"))?;
    Ok(Json(MessageResponse::new("Song updated successfully")))
}

async fn delete_song(
    State(store): State<GuardedSongStore>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_song_id(&id)?;
    store
        .delete_song(id)
        .map_err(ApiError::storage("Failed to delete song"))?;
    Ok(Json(MessageResponse::new("Song deleted successfully")))
}

pub fn make_songs_routes(state: ServerState) -> Router {
    Router::new()
        .route("/", get(get_songs).post(add_song))
        .route("/{id}", get(get_song).put(update_song).delete(delete_song))
        .route("/{id}/text", get(get_song_text))
        .with_state(state)
}
