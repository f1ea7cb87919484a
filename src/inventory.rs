//! Album inventory service.
//!
//! Composes form validation, the catalog store and [`CatalogSync`] into the
//! operations the routes expose. Writes to the album collection are never rolled
//! back when the artist side fails to follow; the failure travels back as a warning.

use crate::catalog_store::validation::join_messages;
use crate::catalog_store::{
    validate_album_fields, Album, AlbumFields, Artist, CatalogStore, ValidationError,
};
use crate::catalog_sync::{CascadeReport, CatalogSync, SyncError};
use crate::presenter::{
    filter_by_min_rating, sort_albums_by_name, sort_albums_by_rating_then_name,
    sort_artists_by_name,
};
use axum::http::StatusCode;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("{}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error(transparent)]
    Cascade(#[from] SyncError),
}

impl InventoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            InventoryError::Validation(_) => StatusCode::BAD_REQUEST,
            InventoryError::NotFound { .. } => StatusCode::NOT_FOUND,
            InventoryError::Storage(_) | InventoryError::Cascade(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn album_not_found(id: &str) -> Self {
        InventoryError::NotFound {
            kind: "Album",
            id: id.to_string(),
        }
    }

    fn artist_not_found(id: &str) -> Self {
        InventoryError::NotFound {
            kind: "Artist",
            id: id.to_string(),
        }
    }
}

/// Result of a write whose primary effect succeeded.
///
/// `warning` is set when the follow-up artist sync failed, leaving the catalog
/// inconsistent until a later sync point.
#[derive(Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub warning: Option<SyncError>,
}

impl<T> Outcome<T> {
    fn complete(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    pub fn is_partial(&self) -> bool {
        self.warning.is_some()
    }
}

// =========================================================================
// View models
// =========================================================================

#[derive(Debug, Serialize)]
pub struct CollectionView {
    pub records: Vec<Album>,
    pub artists: Vec<Artist>,
}

#[derive(Debug, Serialize)]
pub struct AlbumView {
    pub record: Album,
    pub artists: Vec<Artist>,
}

#[derive(Debug, Serialize)]
pub struct EditAlbumView {
    pub record: Album,
}

#[derive(Debug, Serialize)]
pub struct ArtistView {
    pub artist: Artist,
    /// The artist's albums, alphabetical.
    pub albums: Vec<Album>,
    pub records: Vec<Album>,
}

#[derive(Clone)]
pub struct Inventory {
    store: Arc<dyn CatalogStore>,
    sync: CatalogSync,
}

impl Inventory {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        let sync = CatalogSync::new(store.clone());
        Self { store, sync }
    }

    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    // =========================================================================
    // Writes
    // =========================================================================

    pub fn create_album(&self, fields: &AlbumFields) -> Result<Outcome<Album>, InventoryError> {
        let draft = validate_album_fields(fields).map_err(InventoryError::Validation)?;
        let album = self.store.insert_album(draft)?;
        info!("Created album {} \"{}\"", album.id, album.album_name);

        let warning = self.sync.on_album_created(&album).err();
        if let Some(err) = &warning {
            error!("Album {} saved but not attached to an artist: {}", album.id, err);
        }
        Ok(Outcome {
            value: album,
            warning,
        })
    }

    /// Overwrites every field of an album. A changed artist name moves the album's
    /// reference from the old artist to the new one.
    pub fn update_album(
        &self,
        id: &str,
        fields: &AlbumFields,
    ) -> Result<Outcome<Album>, InventoryError> {
        let draft = validate_album_fields(fields).map_err(InventoryError::Validation)?;
        let previous = self
            .store
            .get_album(id)?
            .ok_or_else(|| InventoryError::album_not_found(id))?;
        let updated = self
            .store
            .update_album(id, draft)?
            .ok_or_else(|| InventoryError::album_not_found(id))?;
        info!("Updated album {} \"{}\"", updated.id, updated.album_name);

        if previous.artist_name == updated.artist_name {
            return Ok(Outcome::complete(updated));
        }

        let warning = self
            .sync
            .on_album_deleted(&previous)
            .and_then(|_| self.sync.on_album_created(&updated))
            .err();
        if let Some(err) = &warning {
            error!(
                "Album {} moved from \"{}\" to \"{}\" but artists were not updated: {}",
                id, previous.artist_name, updated.artist_name, err
            );
        }
        Ok(Outcome {
            value: updated,
            warning,
        })
    }

    pub fn delete_album(&self, id: &str) -> Result<Outcome<Album>, InventoryError> {
        let album = self
            .store
            .delete_album(id)?
            .ok_or_else(|| InventoryError::album_not_found(id))?;
        info!("Deleted album {} \"{}\"", album.id, album.album_name);

        let warning = self.sync.on_album_deleted(&album).err();
        if let Some(err) = &warning {
            error!("Album {} deleted but still referenced: {}", album.id, err);
        }
        Ok(Outcome {
            value: album,
            warning,
        })
    }

    /// Deletes an artist together with every album it references.
    pub fn delete_artist(&self, id: &str) -> Result<CascadeReport, InventoryError> {
        let artist = self
            .store
            .get_artist(id)?
            .ok_or_else(|| InventoryError::artist_not_found(id))?;
        let report = self.sync.on_artist_deleted(&artist).map_err(|err| {
            error!("Cascade delete of artist {} failed: {}", id, err);
            InventoryError::Cascade(err)
        })?;
        Ok(report)
    }

    // =========================================================================
    // Views
    // =========================================================================

    pub fn collection(&self) -> Result<CollectionView, InventoryError> {
        Ok(CollectionView {
            records: sort_albums_by_rating_then_name(self.store.list_albums()?),
            artists: sort_artists_by_name(self.store.list_artists()?),
        })
    }

    pub fn best_albums(&self, min_rating: Option<i64>) -> Result<CollectionView, InventoryError> {
        let mut records = self.store.list_albums()?;
        if let Some(min_rating) = min_rating {
            records = filter_by_min_rating(records, min_rating);
        }
        Ok(CollectionView {
            records: sort_albums_by_rating_then_name(records),
            artists: sort_artists_by_name(self.store.list_artists()?),
        })
    }

    pub fn artists(&self) -> Result<Vec<Artist>, InventoryError> {
        Ok(sort_artists_by_name(self.store.list_artists()?))
    }

    pub fn album(&self, id: &str) -> Result<AlbumView, InventoryError> {
        let record = self
            .store
            .get_album(id)?
            .ok_or_else(|| InventoryError::album_not_found(id))?;
        Ok(AlbumView {
            record,
            artists: sort_artists_by_name(self.store.list_artists()?),
        })
    }

    pub fn edit_album(&self, id: &str) -> Result<EditAlbumView, InventoryError> {
        let record = self
            .store
            .get_album(id)?
            .ok_or_else(|| InventoryError::album_not_found(id))?;
        Ok(EditAlbumView { record })
    }

    pub fn artist_detail(&self, id: &str) -> Result<ArtistView, InventoryError> {
        let artist = self
            .store
            .get_artist(id)?
            .ok_or_else(|| InventoryError::artist_not_found(id))?;
        let albums = sort_albums_by_name(self.store.get_albums_by_ids(&artist.albums)?);
        Ok(ArtistView {
            artist,
            albums,
            records: sort_albums_by_rating_then_name(self.store.list_albums()?),
        })
    }
}
