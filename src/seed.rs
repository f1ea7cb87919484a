//! Starter catalog.

use crate::catalog_store::{AlbumDraft, CatalogStore};
use crate::catalog_sync::CatalogSync;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

struct StarterAlbum {
    album_name: &'static str,
    artist_name: &'static str,
    genre: &'static str,
    rating: i64,
    cover_art_img: &'static str,
}

const STARTER_ALBUMS: &[StarterAlbum] = &[
    StarterAlbum {
        album_name: "Shore",
        artist_name: "Fleet Foxes",
        genre: "Folk",
        rating: 9,
        cover_art_img: "https://lastfm.freetls.fastly.net/i/u/770x0/a3638eeb1bb4ffc5a8c12cf28e56ba0f.jpg",
    },
    StarterAlbum {
        album_name: "Teen Dream",
        artist_name: "Beach House",
        genre: "Alternative",
        rating: 9,
        cover_art_img: "https://lastfm.freetls.fastly.net/i/u/770x0/a8af9bee825945a7a84acc6eb6bba298.jpg",
    },
    StarterAlbum {
        album_name: "Cave World",
        artist_name: "Viagra Boys",
        genre: "Punk",
        rating: 8,
        cover_art_img: "https://lastfm.freetls.fastly.net/i/u/770x0/200a9c16025ea953cd378aeb44b8d6f8.jpg",
    },
    StarterAlbum {
        album_name: "Light Upon the Lake",
        artist_name: "Whitney",
        genre: "Alternative",
        rating: 8,
        cover_art_img: "https://lastfm.freetls.fastly.net/i/u/770x0/c1018c6d883cd35794c92d2dda92c380.jpg",
    },
    StarterAlbum {
        album_name: "Happening",
        artist_name: "Launder",
        genre: "Alternative",
        rating: 7,
        cover_art_img: "https://lastfm.freetls.fastly.net/i/u/770x0/864ba8b7aaa9313daf5d6a0b1c5791d0.jpg",
    },
    StarterAlbum {
        album_name: "Infinite Granite",
        artist_name: "Deafheaven",
        genre: "Metal",
        rating: 8,
        cover_art_img: "https://lastfm.freetls.fastly.net/i/u/770x0/b756bb2bdf203a3d4b51d5bd0a9816fb.jpg",
    },
    StarterAlbum {
        album_name: "Currents",
        artist_name: "Tame Impala",
        genre: "Alternative",
        rating: 10,
        cover_art_img: "https://lastfm.freetls.fastly.net/i/u/770x0/dd45b0438a315aed98b5830aa2fc43c5.jpg",
    },
];

/// Wipes the catalog and fills it with the starter albums, one artist each.
///
/// Returns the number of albums inserted.
pub fn seed_catalog(store: Arc<dyn CatalogStore>) -> Result<usize> {
    store.clear()?;
    info!("Catalog wiped");

    let sync = CatalogSync::new(store.clone());
    for starter in STARTER_ALBUMS {
        let album = store.insert_album(AlbumDraft {
            album_name: starter.album_name.to_string(),
            artist_name: starter.artist_name.to_string(),
            genre: starter.genre.to_string(),
            rating: starter.rating,
            cover_art_img: Some(starter.cover_art_img.to_string()),
        })?;
        sync.on_album_created(&album)?;
    }

    info!(
        "Seeded {} albums and {} artists",
        store.get_albums_count(),
        store.get_artists_count()
    );
    Ok(STARTER_ALBUMS.len())
}
