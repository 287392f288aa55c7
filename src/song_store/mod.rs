mod error;
mod models;
mod query;
mod schema;
mod sqlite_song_store;

pub use error::{StoreError, StoreResult};
pub use models::*;
pub use schema::SONG_VERSIONED_SCHEMAS;
pub use sqlite_song_store::SqliteSongStore;

pub trait SongStore: Send + Sync {
    /// Songs matching both substring filters, ordered by id, one page at a time.
    fn fetch_songs(&self, filter: &SongFilter) -> StoreResult<Vec<Song>>;

    fn fetch_song(&self, id: SongId) -> StoreResult<Song>;

    /// Raw lyrics of a song, fails with [`StoreError::NotFound`] if absent.
    fn fetch_song_text(&self, id: SongId) -> StoreResult<String>;

    /// Inserts a song made of the request names and the enrichment details.
    /// Returns the id assigned by storage.
    fn save_song(&self, song: &NewSong, details: &SongDetails) -> StoreResult<SongId>;

    /// Overwrites every mutable column. Updating a missing id is a no-op.
    fn update_song(&self, id: SongId, song: &SongUpdate) -> StoreResult<()>;

    /// Deleting a missing id is a no-op.
    fn delete_song(&self, id: SongId) -> StoreResult<()>;

    fn count_songs(&self) -> StoreResult<usize>;
}
