//! Keeps every artist's album references in line with the albums' artist names.

mod sync;

pub use sync::{CascadeReport, CatalogSync, SyncError};
