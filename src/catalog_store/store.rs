//! SQLite-backed catalog store.
//!
//! Albums and artists are stored as rows of their own tables; an artist's
//! ordered album references are rows of `artist_albums`.

use super::models::*;
use super::schema::CATALOG_SCHEMA;
use super::trait_def::CatalogStore;
use anyhow::{anyhow, Context, Result};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// SQLite-backed catalog store.
///
/// All statements go through one connection, so each call is atomic on its own.
/// Sequences of calls (such as a read-modify-write of an artist) are not.
#[derive(Clone)]
pub struct SqliteCatalogStore {
    conn: Arc<Mutex<Connection>>,
}

/// Creates the schema in an empty database, otherwise checks that the existing one
/// is ours and current.
fn create_or_validate_schema(conn: &Connection) -> Result<()> {
    let table_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |r| r.get(0),
    )?;

    if table_count == 0 {
        info!("Creating catalog db schema at version {}", CATALOG_SCHEMA.version);
        return CATALOG_SCHEMA.create(conn);
    }

    CATALOG_SCHEMA
        .validate(conn)
        .context("Catalog database does not match the expected schema")
}

impl SqliteCatalogStore {
    /// Open (or create) the catalog database at `db_path`.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path.as_ref()).with_context(|| {
            format!(
                "Failed to open catalog database at {}",
                db_path.as_ref().display()
            )
        })?;

        create_or_validate_schema(&conn)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let store = SqliteCatalogStore {
            conn: Arc::new(Mutex::new(conn)),
        };
        info!(
            "Opened catalog: {} albums, {} artists",
            store.get_albums_count(),
            store.get_artists_count()
        );
        Ok(store)
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("Catalog connection mutex is poisoned"))
    }

    fn count(&self, table: &str) -> usize {
        self.conn()
            .ok()
            .and_then(|conn| {
                conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| {
                    r.get::<_, i64>(0)
                })
                .ok()
            })
            .unwrap_or(0) as usize
    }

    // =========================================================================
    // Internal Helper Methods
    // =========================================================================

    const ALBUM_COLUMNS: &'static str =
        "id, album_name, artist_name, genre, rating, cover_art_img";

    fn parse_album_row(row: &rusqlite::Row) -> rusqlite::Result<Album> {
        Ok(Album {
            id: row.get(0)?,
            album_name: row.get(1)?,
            artist_name: row.get(2)?,
            genre: row.get(3)?,
            rating: row.get(4)?,
            cover_art_img: row.get(5)?,
        })
    }

    fn get_album_inner(conn: &Connection, id: &str) -> Result<Option<Album>> {
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM albums WHERE id = ?1",
            Self::ALBUM_COLUMNS
        ))?;
        Ok(stmt
            .query_row(params![id], Self::parse_album_row)
            .optional()?)
    }

    fn get_artist_album_ids(conn: &Connection, artist_rowid: i64) -> Result<Vec<String>> {
        let mut stmt = conn.prepare_cached(
            "SELECT album_id FROM artist_albums WHERE artist_rowid = ?1 ORDER BY position",
        )?;
        let ids = stmt
            .query_map(params![artist_rowid], |r| r.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(ids)
    }

    fn get_artist_inner(conn: &Connection, id: &str) -> Result<Option<Artist>> {
        let row = conn
            .query_row(
                "SELECT rowid, id, name FROM artists WHERE id = ?1",
                params![id],
                |r| Ok((r.get::<_, i64>(0)?, r.get(1)?, r.get(2)?)),
            )
            .optional()?;

        match row {
            None => Ok(None),
            Some((rowid, id, name)) => Ok(Some(Artist {
                id,
                name,
                albums: Self::get_artist_album_ids(conn, rowid)?,
            })),
        }
    }

    fn write_artist_albums(conn: &Connection, artist_rowid: i64, album_ids: &[String]) -> Result<()> {
        conn.execute(
            "DELETE FROM artist_albums WHERE artist_rowid = ?1",
            params![artist_rowid],
        )?;
        let mut stmt = conn.prepare_cached(
            "INSERT INTO artist_albums (artist_rowid, album_id, position) VALUES (?1, ?2, ?3)",
        )?;
        for (position, album_id) in album_ids.iter().enumerate() {
            stmt.execute(params![artist_rowid, album_id, position as i64])?;
        }
        Ok(())
    }
}

impl CatalogStore for SqliteCatalogStore {
    fn list_albums(&self) -> Result<Vec<Album>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM albums ORDER BY rowid",
            Self::ALBUM_COLUMNS
        ))?;
        let albums = stmt
            .query_map([], Self::parse_album_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(albums)
    }

    fn get_album(&self, id: &str) -> Result<Option<Album>> {
        let conn = self.conn()?;
        Self::get_album_inner(&conn, id)
    }

    fn get_albums_by_ids(&self, ids: &[String]) -> Result<Vec<Album>> {
        let conn = self.conn()?;
        let mut albums = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(album) = Self::get_album_inner(&conn, id)? {
                albums.push(album);
            }
        }
        Ok(albums)
    }

    fn insert_album(&self, draft: AlbumDraft) -> Result<Album> {
        let album = draft.into_album(new_document_id());
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO albums (id, album_name, artist_name, genre, rating, cover_art_img)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                album.id,
                album.album_name,
                album.artist_name,
                album.genre,
                album.rating,
                album.cover_art_img
            ],
        )?;
        debug!("Inserted album {} ({})", album.id, album.album_name);
        Ok(album)
    }

    fn update_album(&self, id: &str, draft: AlbumDraft) -> Result<Option<Album>> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE albums SET album_name = ?2, artist_name = ?3, genre = ?4, rating = ?5,
                    cover_art_img = ?6
             WHERE id = ?1",
            params![
                id,
                draft.album_name,
                draft.artist_name,
                draft.genre,
                draft.rating,
                draft.cover_art_img
            ],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Ok(Some(draft.into_album(id.to_string())))
    }

    fn delete_album(&self, id: &str) -> Result<Option<Album>> {
        let conn = self.conn()?;
        let album = match Self::get_album_inner(&conn, id)? {
            Some(album) => album,
            None => return Ok(None),
        };
        conn.execute("DELETE FROM albums WHERE id = ?1", params![id])?;
        Ok(Some(album))
    }

    fn delete_albums(&self, ids: &[String]) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }
        let conn = self.conn()?;
        let placeholders = vec!["?"; ids.len()].join(", ");
        let deleted = conn.execute(
            &format!("DELETE FROM albums WHERE id IN ({})", placeholders),
            params_from_iter(ids.iter()),
        )?;
        Ok(deleted)
    }

    fn list_artists(&self) -> Result<Vec<Artist>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached("SELECT rowid, id, name FROM artists ORDER BY rowid")?;
        let rows = stmt
            .query_map([], |r| {
                Ok((r.get::<_, i64>(0)?, r.get::<_, String>(1)?, r.get::<_, String>(2)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut artists = Vec::with_capacity(rows.len());
        for (rowid, id, name) in rows {
            artists.push(Artist {
                id,
                name,
                albums: Self::get_artist_album_ids(&conn, rowid)?,
            });
        }
        Ok(artists)
    }

    fn get_artist(&self, id: &str) -> Result<Option<Artist>> {
        let conn = self.conn()?;
        Self::get_artist_inner(&conn, id)
    }

    fn insert_artist(&self, name: &str, album_ids: Vec<String>) -> Result<Artist> {
        let artist = Artist {
            id: new_document_id(),
            name: name.to_string(),
            albums: album_ids,
        };
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO artists (id, name) VALUES (?1, ?2)",
            params![artist.id, artist.name],
        )?;
        let rowid = tx.last_insert_rowid();
        Self::write_artist_albums(&tx, rowid, &artist.albums)?;
        tx.commit()?;
        debug!("Inserted artist {} ({})", artist.id, artist.name);
        Ok(artist)
    }

    fn save_artist(&self, artist: &Artist) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let rowid: i64 = tx
            .query_row(
                "SELECT rowid FROM artists WHERE id = ?1",
                params![artist.id],
                |r| r.get(0),
            )
            .optional()?
            .ok_or_else(|| anyhow!("Artist {} does not exist", artist.id))?;
        Self::write_artist_albums(&tx, rowid, &artist.albums)?;
        tx.commit()?;
        Ok(())
    }

    fn delete_artist(&self, id: &str) -> Result<Option<Artist>> {
        let conn = self.conn()?;
        let artist = match Self::get_artist_inner(&conn, id)? {
            Some(artist) => artist,
            None => return Ok(None),
        };
        // artist_albums rows go with it (ON DELETE CASCADE).
        conn.execute("DELETE FROM artists WHERE id = ?1", params![id])?;
        Ok(Some(artist))
    }

    fn clear(&self) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM artist_albums", [])?;
        tx.execute("DELETE FROM artists", [])?;
        tx.execute("DELETE FROM albums", [])?;
        tx.commit()?;
        Ok(())
    }

    fn get_albums_count(&self) -> usize {
        self.count("albums")
    }

    fn get_artists_count(&self) -> usize {
        self.count("artists")
    }
}
