//! Common test helpers: directory fakes, an in-memory registry and player builders.

pub mod directory_mocks;
pub mod registry_mocks;

use std::sync::Arc;

use tokio::sync::RwLock;
use wrldlink_domain::{CharacterId, GuildId, GuildMembership, Player, SelectedCharacter};

use crate::infrastructure::ports::SharedPlayer;

pub use directory_mocks::{DirectoryCall, RecordingDirectories};
pub use registry_mocks::InMemoryPlayerRegistry;

/// A player whose character has no guild.
pub fn guildless(character_id: u32, name: &str) -> SharedPlayer {
    let character =
        SelectedCharacter::new(CharacterId::new(character_id), name).expect("valid character");
    Arc::new(RwLock::new(Player::new(character)))
}

/// A player whose character belongs to `guild_id`.
pub fn guild_member(character_id: u32, name: &str, guild_id: u32) -> SharedPlayer {
    let character = SelectedCharacter::new(CharacterId::new(character_id), name)
        .expect("valid character")
        .with_guild(GuildMembership::new(GuildId::new(guild_id)));
    Arc::new(RwLock::new(Player::new(character)))
}
