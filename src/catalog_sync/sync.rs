use crate::catalog_store::{Album, Artist, CatalogStore};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while restoring artist/album consistency.
///
/// By the time one of these is returned the primary write has already happened;
/// callers report it instead of undoing that write.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to scan artists: {0}")]
    Scan(#[source] anyhow::Error),

    #[error("Failed to persist artist \"{artist}\": {source}")]
    Persist {
        artist: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to delete the albums of artist {artist_id}, artist kept: {source}")]
    AlbumCleanup {
        artist_id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Deleted {albums_deleted} albums but failed to delete artist {artist_id}: {source}")]
    ArtistRemoval {
        artist_id: String,
        albums_deleted: usize,
        #[source]
        source: anyhow::Error,
    },
}

/// What an artist deletion removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct CascadeReport {
    pub albums_deleted: usize,
}

/// Runs the three sync points: album created, album deleted, artist deleted.
///
/// Each operation is a read-modify-write over several store calls with no lock held
/// across them. Two concurrent creations for the same new artist name can both miss
/// the lookup and create two artists.
#[derive(Clone)]
pub struct CatalogSync {
    store: Arc<dyn CatalogStore>,
}

impl CatalogSync {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    fn find_artist_by_name(&self, name: &str) -> Result<Option<Artist>, SyncError> {
        let artists = self.store.list_artists().map_err(SyncError::Scan)?;
        // Case-sensitive, first match wins.
        Ok(artists.into_iter().find(|artist| artist.name == name))
    }

    /// Attach a freshly persisted album to the artist named by `album.artist_name`,
    /// creating that artist if none exists yet.
    ///
    /// Not idempotent: calling it twice for the same album appends the reference twice.
    pub fn on_album_created(&self, album: &Album) -> Result<Artist, SyncError> {
        let existing = self.find_artist_by_name(&album.artist_name)?;
        let found_artist = existing.is_some();

        let artist = if let Some(mut artist) = existing {
            artist.albums.push(album.id.clone());
            self.store
                .save_artist(&artist)
                .map_err(|source| SyncError::Persist {
                    artist: artist.name.clone(),
                    source,
                })?;
            artist
        } else {
            self.store
                .insert_artist(&album.artist_name, vec![album.id.clone()])
                .map_err(|source| SyncError::Persist {
                    artist: album.artist_name.clone(),
                    source,
                })?
        };

        debug!(
            "Album {} attached to {} artist \"{}\" ({} albums)",
            album.id,
            if found_artist { "existing" } else { "new" },
            artist.name,
            artist.albums.len()
        );
        Ok(artist)
    }

    /// Detach a deleted album from every artist carrying its artist name.
    ///
    /// Duplicate names are possible, so all of them are checked. Returns the artists
    /// that were changed, empty when none referenced the album.
    pub fn on_album_deleted(&self, album: &Album) -> Result<Vec<Artist>, SyncError> {
        let namesakes: Vec<Artist> = self
            .store
            .list_artists()
            .map_err(SyncError::Scan)?
            .into_iter()
            .filter(|artist| artist.name == album.artist_name)
            .collect();
        if namesakes.is_empty() {
            warn!(
                "No artist named \"{}\" while detaching album {}",
                album.artist_name, album.id
            );
        }

        let mut changed = Vec::new();
        for mut artist in namesakes {
            if !artist.references(&album.id) {
                continue;
            }
            artist.albums.retain(|id| id != &album.id);
            self.store
                .save_artist(&artist)
                .map_err(|source| SyncError::Persist {
                    artist: artist.name.clone(),
                    source,
                })?;
            debug!("Album {} detached from artist {}", album.id, artist.id);
            changed.push(artist);
        }
        Ok(changed)
    }

    /// Delete every album the artist references, then the artist itself.
    ///
    /// If the albums cannot be deleted the artist is left in place.
    pub fn on_artist_deleted(&self, artist: &Artist) -> Result<CascadeReport, SyncError> {
        let albums_deleted = if artist.albums.is_empty() {
            0
        } else {
            self.store
                .delete_albums(&artist.albums)
                .map_err(|source| SyncError::AlbumCleanup {
                    artist_id: artist.id.clone(),
                    source,
                })?
        };

        self.store
            .delete_artist(&artist.id)
            .map_err(|source| SyncError::ArtistRemoval {
                artist_id: artist.id.clone(),
                albums_deleted,
                source,
            })?;

        info!(
            "Deleted artist \"{}\" and {} of its albums",
            artist.name, albums_deleted
        );
        Ok(CascadeReport { albums_deleted })
    }
}
