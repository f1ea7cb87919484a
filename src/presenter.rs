//! Display ordering for album and artist listings.
//!
//! Everything here is read-only: the functions take ownership of a listing and
//! hand back a reordered one.

use crate::catalog_store::{Album, Artist};
use std::cmp::Ordering;

fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Orders albums by rating, highest first.
///
/// Equal ratings keep their incoming order, except that one left-to-right pass swaps
/// neighbours by the same artist whose names are out of order. A run of three or more
/// such albums is therefore not fully alphabetised.
pub fn sort_albums_by_rating_then_name(mut albums: Vec<Album>) -> Vec<Album> {
    albums.sort_by(|a, b| b.rating.cmp(&a.rating));

    for i in 1..albums.len() {
        let (prev, next) = (&albums[i - 1], &albums[i]);
        if prev.artist_name == next.artist_name && prev.album_name > next.album_name {
            albums.swap(i - 1, i);
        }
    }
    albums
}

/// Orders artists alphabetically, ignoring case.
pub fn sort_artists_by_name(mut artists: Vec<Artist>) -> Vec<Artist> {
    artists.sort_by(|a, b| cmp_case_insensitive(&a.name, &b.name));
    artists
}

/// Orders albums alphabetically by album name, ignoring case.
pub fn sort_albums_by_name(mut albums: Vec<Album>) -> Vec<Album> {
    albums.sort_by(|a, b| cmp_case_insensitive(&a.album_name, &b.album_name));
    albums
}

pub fn filter_by_min_rating(albums: Vec<Album>, min_rating: i64) -> Vec<Album> {
    albums
        .into_iter()
        .filter(|album| album.rating >= min_rating)
        .collect()
}
