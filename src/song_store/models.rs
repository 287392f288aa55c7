use serde::{Deserialize, Serialize};

pub type SongId = i64;

/// A song row as stored in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub group_name: String,
    pub song_name: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

/// Body of an add-song request.
///
/// Only the names are used; release date, lyrics and link come from the
/// enrichment service. The optional fields are accepted so that clients
/// sending a complete record are not rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSong {
    pub group_name: String,
    pub song_name: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Details returned by the enrichment service for a group/song pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongDetails {
    pub release_date: String,
    pub text: String,
    pub link: String,
}

/// Replacement values for every mutable column of a song.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SongUpdate {
    /// Ignored, the id in the path identifies the row.
    #[serde(default)]
    pub id: Option<SongId>,
    pub group_name: String,
    pub song_name: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

/// Substring filters and page bounds for a song listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongFilter {
    pub group: String,
    pub song: String,
    pub page: u32,
    pub limit: u32,
}

impl SongFilter {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;

    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * self.limit as u64
    }
}

impl Default for SongFilter {
    fn default() -> Self {
        Self {
            group: String::new(),
            song: String::new(),
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}
