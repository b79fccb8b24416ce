//! Player registry port.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use wrldlink_domain::Player;

use super::error::RegistryError;

/// A player owned by the registry and shared with whoever observes it.
pub type SharedPlayer = Arc<RwLock<Player>>;

/// Base add/remove bookkeeping of the local world's players.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRegistry: Send + Sync {
    async fn add_player(&self, player: SharedPlayer) -> Result<(), RegistryError>;
    async fn remove_player(&self, player: &SharedPlayer) -> Result<(), RegistryError>;
}
