//! Catalog documents.
//!
//! Field names are serialized in camelCase because that is what the HTML forms
//! and the view layer exchange (`albumName`, `artistName`, `coverArtImg`).

use serde::{Deserialize, Serialize};

/// A rated music release.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub album_name: String,
    pub artist_name: String,
    pub genre: String,
    pub rating: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_art_img: Option<String>,
}

/// A performer, holding references (ids) to the albums credited to its name.
///
/// `albums` is a materialized back-reference: it is rewritten by
/// [`crate::catalog_sync::CatalogSync`] and can go stale between sync points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub albums: Vec<String>,
}

impl Artist {
    pub fn references(&self, album_id: &str) -> bool {
        self.albums.iter().any(|id| id == album_id)
    }
}

/// Album fields as submitted by the add/edit forms.
///
/// Everything is optional at this level: missing fields are reported by
/// [`super::validation::validate_album_fields`] rather than by the decoder, so that
/// a form with several blanks yields one message per blank field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlbumFields {
    pub album_name: Option<String>,
    pub artist_name: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<String>,
    pub cover_art_img: Option<String>,
}

/// Validated album contents, ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlbumDraft {
    pub album_name: String,
    pub artist_name: String,
    pub genre: String,
    pub rating: i64,
    pub cover_art_img: Option<String>,
}

impl AlbumDraft {
    pub fn into_album(self, id: String) -> Album {
        Album {
            id,
            album_name: self.album_name,
            artist_name: self.artist_name,
            genre: self.genre,
            rating: self.rating,
            cover_art_img: self.cover_art_img,
        }
    }
}

/// Generates a new document id.
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
