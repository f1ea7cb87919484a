//! Album Inventory Server Library
//!
//! This library exposes the internal modules for testing and the seeder binary.

pub mod catalog_store;
pub mod catalog_sync;
pub mod config;
pub mod inventory;
pub mod presenter;
pub mod seed;
pub mod server;
pub mod sqlite_persistence;

pub use inventory::Inventory;
pub use server::{make_app, run_server, RequestsLoggingLevel};
