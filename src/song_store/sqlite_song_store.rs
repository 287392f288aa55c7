use super::query::{SearchableColumn, SelectSongs, LOWER_FN, SONG_COLUMNS};
use super::{
    NewSong, Song, SongDetails, SongFilter, SongId, SongStore, SongUpdate, StoreError,
    StoreResult,
};
use crate::sqlite_persistence::SqliteDatabase;
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, params_from_iter, OptionalExtension};
use tracing::debug;

pub struct SqliteSongStore {
    db: SqliteDatabase,
}

impl SqliteSongStore {
    pub fn new(db: SqliteDatabase) -> StoreResult<Self> {
        // SQLite's own LOWER() and LIKE only fold ASCII, band names often aren't.
        db.conn().create_scalar_function(
            LOWER_FN,
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let value: String = ctx.get(0)?;
                Ok(value.to_lowercase())
            },
        )?;
        Ok(Self { db })
    }

    fn row_to_song(row: &rusqlite::Row) -> rusqlite::Result<Song> {
        Ok(Song {
            id: row.get("id")?,
            group_name: row.get("group_name")?,
            song_name: row.get("song_name")?,
            release_date: row.get("release_date")?,
            text: row.get("text")?,
            link: row.get("link")?,
        })
    }
}

impl SongStore for SqliteSongStore {
    fn fetch_songs(&self, filter: &SongFilter) -> StoreResult<Vec<Song>> {
        // SQLite reads a negative OFFSET as 0, an offset past i64 can only be past the end.
        let offset = match i64::try_from(filter.offset()) {
            Ok(offset) => offset,
            Err(_) => {
                debug!("Offset {} is past any table, empty page", filter.offset());
                return Ok(Vec::new());
            }
        };
        let (sql, values) = SelectSongs::new()
            .containing(SearchableColumn::GroupName, &filter.group)
            .containing(SearchableColumn::SongName, &filter.song)
            .paginate(filter.limit, offset)
            .build();

        let conn = self.db.conn();
        let mut stmt = conn.prepare(&sql)?;
        let songs = stmt
            .query_map(params_from_iter(values), Self::row_to_song)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(songs)
    }

    fn fetch_song(&self, id: SongId) -> StoreResult<Song> {
        let conn = self.db.conn();
        conn.query_row(
            &format!("SELECT {} FROM songs WHERE id = ?1", SONG_COLUMNS),
            params![id],
            Self::row_to_song,
        )
        .optional()?
        .ok_or(StoreError::NotFound(id))
    }

    fn fetch_song_text(&self, id: SongId) -> StoreResult<String> {
        let conn = self.db.conn();
        conn.query_row(
            "SELECT text FROM songs WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )
        .optional()?
        .ok_or(StoreError::NotFound(id))
    }

    fn save_song(&self, song: &NewSong, details: &SongDetails) -> StoreResult<SongId> {
        let conn = self.db.conn();
        conn.execute(
            "INSERT INTO songs (group_name, song_name, release_date, text, link)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                song.group_name,
                song.song_name,
                details.release_date,
                details.text,
                details.link
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update_song(&self, id: SongId, song: &SongUpdate) -> StoreResult<()> {
        let conn = self.db.conn();
        let updated = conn.execute(
            "UPDATE songs
             SET group_name = ?1, song_name = ?2, release_date = ?3, text = ?4, link = ?5
             WHERE id = ?6",
            params![
                song.group_name,
                song.song_name,
                song.release_date,
                song.text,
                song.link,
                id
            ],
        )?;
        debug!("Update of song {} touched {} rows", id, updated);
        Ok(())
    }

    fn delete_song(&self, id: SongId) -> StoreResult<()> {
        let conn = self.db.conn();
        let deleted = conn.execute("DELETE FROM songs WHERE id = ?1", params![id])?;
        debug!("Delete of song {} removed {} rows", id, deleted);
        Ok(())
    }

    fn count_songs(&self) -> StoreResult<usize> {
        let conn = self.db.conn();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM songs", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
