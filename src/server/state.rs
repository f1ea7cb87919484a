use axum::extract::FromRef;

use crate::inventory::Inventory;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedInventory = Arc<Inventory>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub inventory: GuardedInventory,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, inventory: Inventory) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            inventory: Arc::new(inventory),
            hash: env!("GIT_HASH").to_string(),
        }
    }
}

impl FromRef<ServerState> for GuardedInventory {
    fn from_ref(input: &ServerState) -> Self {
        input.inventory.clone()
    }
}
