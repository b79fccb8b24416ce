//! Process-wide guild short id cache.
//!
//! Maps a guild to the short id the guild directory assigned it for this
//! server. The guild directory stays the source of truth: every entering
//! member re-registers and the returned id overwrites whatever is cached.
//! Entries are never evicted when members leave.

use dashmap::DashMap;
use wrldlink_domain::{GuildId, GuildShortId};

/// Concurrent guild id -> short id map, last writer wins per guild.
#[derive(Debug, Default)]
pub struct GuildShortIdCache {
    entries: DashMap<GuildId, GuildShortId>,
}

impl GuildShortIdCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Register or overwrite the short id of a guild, returning the previous one.
    pub fn register_short_id(
        &self,
        guild_id: GuildId,
        short_id: GuildShortId,
    ) -> Option<GuildShortId> {
        let previous = self.entries.insert(guild_id, short_id);
        match previous {
            Some(old) if old != short_id => tracing::warn!(
                guild_id = %guild_id,
                old_short_id = %old,
                short_id = %short_id,
                "Guild short id reassigned"
            ),
            Some(_) => {}
            None => tracing::debug!(
                guild_id = %guild_id,
                short_id = %short_id,
                "Guild short id registered"
            ),
        }
        previous
    }

    pub fn short_id(&self, guild_id: GuildId) -> Option<GuildShortId> {
        self.entries.get(&guild_id).map(|entry| *entry.value())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
