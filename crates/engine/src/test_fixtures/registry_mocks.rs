//! In-memory player registry for testing.

use async_trait::async_trait;
use dashmap::DashMap;
use wrldlink_domain::PlayerId;

use crate::infrastructure::ports::{PlayerRegistry, RegistryError, SharedPlayer};

/// Registry that only does the base bookkeeping.
#[derive(Default)]
pub struct InMemoryPlayerRegistry {
    players: DashMap<PlayerId, SharedPlayer>,
}

impl InMemoryPlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Drop a player behind the context's back.
    pub async fn forget(&self, player: &SharedPlayer) {
        let player_id = player.read().await.id();
        self.players.remove(&player_id);
    }
}

#[async_trait]
impl PlayerRegistry for InMemoryPlayerRegistry {
    async fn add_player(&self, player: SharedPlayer) -> Result<(), RegistryError> {
        let player_id = player.read().await.id();
        if self.players.contains_key(&player_id) {
            return Err(RegistryError::AlreadyRegistered(player_id));
        }
        self.players.insert(player_id, player);
        Ok(())
    }

    async fn remove_player(&self, player: &SharedPlayer) -> Result<(), RegistryError> {
        let player_id = player.read().await.id();
        self.players
            .remove(&player_id)
            .map(|_| ())
            .ok_or(RegistryError::NotRegistered(player_id))
    }
}
