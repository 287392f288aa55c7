mod database;
mod schema;

pub use database::{DatabaseLocation, SqliteDatabase};
pub use schema::{Column, SqlType, Table, VersionedSchema, BASE_DB_VERSION};
