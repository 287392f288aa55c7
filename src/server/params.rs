//! Parsing of query and path parameters into typed values.
//!
//! A parameter that is absent (or present but empty) takes its default. A
//! parameter that is present but not a positive integer is an error, it is
//! never silently replaced by the default.

use crate::song_store::{SongFilter, SongId};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("Parameter '{name}' must be a positive integer, got '{value}'")]
    NotAPositiveInteger { name: &'static str, value: String },

    #[error("Invalid song id '{0}'")]
    InvalidSongId(String),
}

fn parse_positive(name: &'static str, raw: Option<&str>, default: u32) -> Result<u32, ParamError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };
    match raw.parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ParamError::NotAPositiveInteger {
            name,
            value: raw.to_string(),
        }),
    }
}

pub fn parse_song_id(raw: &str) -> Result<SongId, ParamError> {
    raw.trim()
        .parse::<SongId>()
        .map_err(|_| ParamError::InvalidSongId(raw.to_string()))
}

/// Query string of `GET /songs`.
#[derive(Deserialize, Debug, Default)]
pub struct ListSongsQuery {
    pub group: Option<String>,
    pub song: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListSongsQuery {
    pub fn into_filter(self) -> Result<SongFilter, ParamError> {
        Ok(SongFilter {
            page: parse_positive("page", self.page.as_deref(), SongFilter::DEFAULT_PAGE)?,
            limit: parse_positive("limit", self.limit.as_deref(), SongFilter::DEFAULT_LIMIT)?,
            group: self.group.unwrap_or_default(),
            song: self.song.unwrap_or_default(),
        })
    }
}

/// A page of verses, one verse per page unless asked otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersePage {
    pub page: u32,
    pub limit: u32,
}

impl VersePage {
    pub const DEFAULT_LIMIT: u32 = 1;
}

/// Query string of `GET /songs/{id}/text`.
#[derive(Deserialize, Debug, Default)]
pub struct SongTextQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl SongTextQuery {
    pub fn into_page(self) -> Result<VersePage, ParamError> {
        Ok(VersePage {
            page: parse_positive("page", self.page.as_deref(), 1)?,
            limit: parse_positive("limit", self.limit.as_deref(), VersePage::DEFAULT_LIMIT)?,
        })
    }
}
