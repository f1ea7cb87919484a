//! CatalogStore trait definition.
//!
//! The two collections (albums and artists) are exposed as plain document
//! operations. Nothing here keeps them consistent with each other; that is the
//! job of [`crate::catalog_sync::CatalogSync`].

use super::models::{Album, AlbumDraft, Artist};
use anyhow::Result;

/// Trait for catalog storage backends.
pub trait CatalogStore: Send + Sync {
    // =========================================================================
    // Albums
    // =========================================================================

    /// List every album, in insertion order.
    fn list_albums(&self) -> Result<Vec<Album>>;

    /// Get an album by ID.
    fn get_album(&self, id: &str) -> Result<Option<Album>>;

    /// Get the albums with the given IDs. Unknown IDs are skipped.
    fn get_albums_by_ids(&self, ids: &[String]) -> Result<Vec<Album>>;

    /// Persist a new album, assigning it a fresh ID.
    fn insert_album(&self, draft: AlbumDraft) -> Result<Album>;

    /// Overwrite every field of an existing album. Returns `None` if the ID is unknown.
    fn update_album(&self, id: &str, draft: AlbumDraft) -> Result<Option<Album>>;

    /// Delete an album, returning the removed document.
    fn delete_album(&self, id: &str) -> Result<Option<Album>>;

    /// Delete every album whose ID is in `ids`. Returns how many were removed.
    fn delete_albums(&self, ids: &[String]) -> Result<usize>;

    // =========================================================================
    // Artists
    // =========================================================================

    /// List every artist, in insertion order, with their album references.
    fn list_artists(&self) -> Result<Vec<Artist>>;

    /// Get an artist by ID.
    fn get_artist(&self, id: &str) -> Result<Option<Artist>>;

    /// Persist a new artist with the given album references.
    fn insert_artist(&self, name: &str, album_ids: Vec<String>) -> Result<Artist>;

    /// Replace the stored album references of an existing artist.
    fn save_artist(&self, artist: &Artist) -> Result<()>;

    /// Delete an artist, returning the removed document.
    fn delete_artist(&self, id: &str) -> Result<Option<Artist>>;

    // =========================================================================
    // Maintenance
    // =========================================================================

    /// Remove every album and artist.
    fn clear(&self) -> Result<()>;

    fn get_albums_count(&self) -> usize;

    fn get_artists_count(&self) -> usize;
}
