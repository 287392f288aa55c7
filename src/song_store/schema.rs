//! SQLite schema for the song library database.

use crate::sqlite_column;
use crate::sqlite_persistence::{SqlType, Table, VersionedSchema};

const SONGS_TABLE_V1: Table = Table {
    name: "songs",
    columns: &[
        sqlite_column!("id", SqlType::Integer, is_primary_key = true),
        sqlite_column!("group_name", SqlType::Text, non_null = true),
        sqlite_column!("song_name", SqlType::Text, non_null = true),
        sqlite_column!("release_date", SqlType::Text, non_null = true),
        sqlite_column!("text", SqlType::Text, non_null = true),
        sqlite_column!("link", SqlType::Text, non_null = true),
    ],
    indices: &[("idx_songs_group_name", "group_name")],
};

pub const SONG_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 1,
    tables: &[SONGS_TABLE_V1],
}];
