//! Shared constants for end-to-end tests
//!
//! When the seeded catalog changes, update only this file.

#![allow(dead_code)]

// ============================================================================
// Seeded Catalog
// ============================================================================

/// Albums (and artists, one per album) inserted by the seeder
pub const SEEDED_ALBUM_COUNT: usize = 7;

pub const TAME_IMPALA: &str = "Tame Impala";
pub const CURRENTS: &str = "Currents";

pub const FLEET_FOXES: &str = "Fleet Foxes";
pub const SHORE: &str = "Shore";

pub const DEAFHEAVEN: &str = "Deafheaven";
pub const INFINITE_GRANITE: &str = "Infinite Granite";

/// Seeded albums in collection order: rating first, then insertion order
pub const SEEDED_COLLECTION_ORDER: [&str; SEEDED_ALBUM_COUNT] = [
    "Currents",
    "Shore",
    "Teen Dream",
    "Cave World",
    "Light Upon the Lake",
    "Infinite Granite",
    "Happening",
];

/// Seeded artists in alphabetical order
pub const SEEDED_ARTIST_ORDER: [&str; SEEDED_ALBUM_COUNT] = [
    "Beach House",
    "Deafheaven",
    "Fleet Foxes",
    "Launder",
    "Tame Impala",
    "Viagra Boys",
    "Whitney",
];

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for the server to answer on "/"
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Delay between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// Per-request timeout for the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
