use std::sync::Arc;

use wrldlink_domain::ServerId;

use crate::infrastructure::ports::{GuildDirectory, OnlineStatusDirectory, SharedPlayer};
use crate::stores::GuildShortIdCache;

use super::PresenceError;

/// Use case run when a player becomes active in this server's world.
///
/// Publishes the character as online on this server, then, for guild
/// members, registers with the guild directory and records the returned
/// short id on the player and in the cache. The two directory updates are
/// independent facts; a failure stops the sequence but nothing is rolled back.
pub struct EnterWorld {
    online_status: Arc<dyn OnlineStatusDirectory>,
    guild: Arc<dyn GuildDirectory>,
    guild_short_ids: Arc<GuildShortIdCache>,
    server_id: ServerId,
}

impl EnterWorld {
    pub fn new(
        online_status: Arc<dyn OnlineStatusDirectory>,
        guild: Arc<dyn GuildDirectory>,
        guild_short_ids: Arc<GuildShortIdCache>,
        server_id: ServerId,
    ) -> Self {
        Self {
            online_status,
            guild,
            guild_short_ids,
            server_id,
        }
    }

    pub async fn execute(&self, player: &SharedPlayer) -> Result<(), PresenceError> {
        let character = player.read().await.selected_character().clone();

        self.online_status
            .set_online_state(character.id(), character.name(), self.server_id)
            .await?;

        let Some(guild_id) = character.guild_id() else {
            tracing::info!(
                character_id = %character.id(),
                server_id = %self.server_id,
                "Player entered world"
            );
            return Ok(());
        };

        let short_id = self
            .guild
            .member_enter_game(guild_id, character.name(), self.server_id)
            .await?;
        player.write().await.set_short_guild_id(short_id);
        self.guild_short_ids.register_short_id(guild_id, short_id);

        tracing::info!(
            character_id = %character.id(),
            guild_id = %guild_id,
            short_id = %short_id,
            server_id = %self.server_id,
            "Guild member entered world"
        );
        Ok(())
    }
}
