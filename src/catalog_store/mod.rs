#[cfg(test)]
pub(crate) mod failing_store;
mod models;
mod schema;
mod store;
mod trait_def;
pub mod validation;

pub use models::*;
pub use schema::CATALOG_SCHEMA;
pub use store::SqliteCatalogStore;
pub use trait_def::CatalogStore;
pub use validation::{validate_album_fields, ValidationError};
