//! A catalog store that delegates to SQLite but can be told to fail selected calls.

use super::models::*;
use super::store::SqliteCatalogStore;
use super::trait_def::CatalogStore;
use anyhow::{bail, Result};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct FailingStore {
    inner: SqliteCatalogStore,
    pub fail_list_artists: AtomicBool,
    pub fail_save_artist: AtomicBool,
    pub fail_delete_albums: AtomicBool,
}

impl FailingStore {
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        Ok(Self {
            inner: SqliteCatalogStore::new(db_path)?,
            fail_list_artists: AtomicBool::new(false),
            fail_save_artist: AtomicBool::new(false),
            fail_delete_albums: AtomicBool::new(false),
        })
    }

    fn check(flag: &AtomicBool, call: &str) -> Result<()> {
        if flag.load(Ordering::SeqCst) {
            bail!("{} failed: disk on fire", call);
        }
        Ok(())
    }
}

impl CatalogStore for FailingStore {
    fn list_albums(&self) -> Result<Vec<Album>> {
        self.inner.list_albums()
    }
    fn get_album(&self, id: &str) -> Result<Option<Album>> {
        self.inner.get_album(id)
    }
    fn get_albums_by_ids(&self, ids: &[String]) -> Result<Vec<Album>> {
        self.inner.get_albums_by_ids(ids)
    }
    fn insert_album(&self, draft: AlbumDraft) -> Result<Album> {
        self.inner.insert_album(draft)
    }
    fn update_album(&self, id: &str, draft: AlbumDraft) -> Result<Option<Album>> {
        self.inner.update_album(id, draft)
    }
    fn delete_album(&self, id: &str) -> Result<Option<Album>> {
        self.inner.delete_album(id)
    }
    fn delete_albums(&self, ids: &[String]) -> Result<usize> {
        Self::check(&self.fail_delete_albums, "delete_albums")?;
        self.inner.delete_albums(ids)
    }
    fn list_artists(&self) -> Result<Vec<Artist>> {
        Self::check(&self.fail_list_artists, "list_artists")?;
        self.inner.list_artists()
    }
    fn get_artist(&self, id: &str) -> Result<Option<Artist>> {
        self.inner.get_artist(id)
    }
    fn insert_artist(&self, name: &str, album_ids: Vec<String>) -> Result<Artist> {
        self.inner.insert_artist(name, album_ids)
    }
    fn save_artist(&self, artist: &Artist) -> Result<()> {
        Self::check(&self.fail_save_artist, "save_artist")?;
        self.inner.save_artist(artist)
    }
    fn delete_artist(&self, id: &str) -> Result<Option<Artist>> {
        self.inner.delete_artist(id)
    }
    fn clear(&self) -> Result<()> {
        self.inner.clear()
    }
    fn get_albums_count(&self) -> usize {
        self.inner.get_albums_count()
    }
    fn get_artists_count(&self) -> usize {
        self.inner.get_artists_count()
    }
}
