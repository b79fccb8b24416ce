use std::sync::Arc;

use wrldlink_domain::ServerId;

use crate::infrastructure::ports::{GuildDirectory, OnlineStatusDirectory, SharedPlayer};

use super::PresenceError;

/// Use case run when a player leaves this server's world.
///
/// Marks the character offline and, for guild members, tells the guild
/// directory the member left this server. The player's short guild id and
/// the cached short id are left untouched.
pub struct LeaveWorld {
    online_status: Arc<dyn OnlineStatusDirectory>,
    guild: Arc<dyn GuildDirectory>,
    server_id: ServerId,
}

impl LeaveWorld {
    pub fn new(
        online_status: Arc<dyn OnlineStatusDirectory>,
        guild: Arc<dyn GuildDirectory>,
        server_id: ServerId,
    ) -> Self {
        Self {
            online_status,
            guild,
            server_id,
        }
    }

    pub async fn execute(&self, player: &SharedPlayer) -> Result<(), PresenceError> {
        let character = player.read().await.selected_character().clone();

        self.online_status
            .set_online_state(character.id(), character.name(), ServerId::OFFLINE)
            .await?;

        if let Some(guild_id) = character.guild_id() {
            self.guild
                .member_leave_game(guild_id, character.name(), self.server_id)
                .await?;
        }

        tracing::info!(
            character_id = %character.id(),
            server_id = %self.server_id,
            "Player left world"
        );
        Ok(())
    }
}
