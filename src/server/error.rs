//! Mapping of request failures to HTTP responses.
//!
//! Clients only ever see a short generic message; the underlying cause is
//! logged here.

use crate::enrichment::EnrichmentError;
use crate::song_store::{SongId, StoreError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use super::params::ParamError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Song {0} not found")]
    NotFound(SongId),

    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        source: StoreError,
    },

    #[error("{message}: {source}")]
    Enrichment {
        message: &'static str,
        source: EnrichmentError,
    },
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    /// Wraps a store failure, keeping "not found" distinguishable.
    pub fn storage(message: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |source| match source {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            source => ApiError::Storage { message, source },
        }
    }

    pub fn enrichment(message: &'static str) -> impl FnOnce(EnrichmentError) -> ApiError {
        move |source| ApiError::Enrichment { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } | ApiError::Enrichment { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn public_message(&self) -> &str {
        match self {
            ApiError::Validation(message) => message,
            ApiError::NotFound(_) => "Song not found",
            ApiError::Storage { message, .. } | ApiError::Enrichment { message, .. } => message,
        }
    }
}

impl From<ParamError> for ApiError {
    fn from(err: ParamError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            debug!("Rejected request: {}", self);
        }
        (
            status,
            Json(ErrorBody {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}
