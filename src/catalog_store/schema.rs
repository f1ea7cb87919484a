//! SQLite schema for the album inventory.
//!
//! Albums and artists are independent documents keyed by a text id. An artist's
//! album list lives in `artist_albums`; its `album_id` is a weak reference (no
//! foreign key), so deleting an album does not touch the list by itself.

use crate::sqlite_column;
use crate::sqlite_persistence::{ForeignKey, SqlType, Table, VersionedSchema};

const ALBUMS_TABLE: Table = Table {
    name: "albums",
    columns: &[
        sqlite_column!("rowid", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("id", &SqlType::Text, non_null = true),
        sqlite_column!("album_name", &SqlType::Text, non_null = true),
        sqlite_column!("artist_name", &SqlType::Text, non_null = true),
        sqlite_column!("genre", &SqlType::Text, non_null = true),
        // Range is checked by form validation only.
        sqlite_column!("rating", &SqlType::Integer, non_null = true),
        sqlite_column!("cover_art_img", &SqlType::Text),
    ],
    indices: &[("idx_albums_artist_name", "artist_name")],
    unique_constraints: &[&["id"]],
};

const ARTISTS_TABLE: Table = Table {
    name: "artists",
    columns: &[
        sqlite_column!("rowid", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("id", &SqlType::Text, non_null = true),
        // Not unique: concurrent first submissions can create the same name twice.
        sqlite_column!("name", &SqlType::Text, non_null = true),
    ],
    indices: &[("idx_artists_name", "name")],
    unique_constraints: &[&["id"]],
};

const ARTIST_ROWID_FOREIGN_KEY: ForeignKey = ForeignKey {
    foreign_table: "artists",
    foreign_column: "rowid",
};

const ARTIST_ALBUMS_TABLE: Table = Table {
    name: "artist_albums",
    columns: &[
        sqlite_column!(
            "artist_rowid",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&ARTIST_ROWID_FOREIGN_KEY)
        ),
        sqlite_column!("album_id", &SqlType::Text, non_null = true),
        sqlite_column!("position", &SqlType::Integer, non_null = true),
    ],
    indices: &[
        ("idx_artist_albums_artist", "artist_rowid"),
        ("idx_artist_albums_album", "album_id"),
    ],
    unique_constraints: &[],
};

pub const CATALOG_SCHEMA: VersionedSchema = VersionedSchema {
    version: 0,
    tables: &[ALBUMS_TABLE, ARTISTS_TABLE, ARTIST_ALBUMS_TABLE],
};
