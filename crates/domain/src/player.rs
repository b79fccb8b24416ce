//! Player session state as seen by the world-server.
//!
//! The player registry owns a `Player` for as long as the session is
//! admitted. Presence coordination only reads the selected character and
//! annotates the player with the guild short id handed out by the guild
//! directory.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{CharacterId, GuildId, GuildShortId, PlayerId};

/// Rank of a character inside its guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuildPosition {
    #[default]
    NormalMember,
    BattleMaster,
    BattleMasterAssistant,
    GuildMaster,
}

/// A character's membership in a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMembership {
    pub guild_id: GuildId,
    pub position: GuildPosition,
}

impl GuildMembership {
    pub fn new(guild_id: GuildId) -> Self {
        Self {
            guild_id,
            position: GuildPosition::default(),
        }
    }

    pub fn with_position(mut self, position: GuildPosition) -> Self {
        self.position = position;
        self
    }
}

/// The character a player is playing in this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCharacter {
    id: CharacterId,
    name: String,
    guild: Option<GuildMembership>,
}

impl SelectedCharacter {
    /// Create a guildless character. The name must not be blank.
    pub fn new(id: CharacterId, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            guild: None,
        })
    }

    pub fn with_guild(mut self, membership: GuildMembership) -> Self {
        self.guild = Some(membership);
        self
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn guild(&self) -> Option<&GuildMembership> {
        self.guild.as_ref()
    }

    pub fn guild_id(&self) -> Option<GuildId> {
        self.guild.map(|g| g.guild_id)
    }
}

/// A connected session playing a character on this server.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    character: SelectedCharacter,
    short_guild_id: Option<GuildShortId>,
}

impl Player {
    pub fn new(character: SelectedCharacter) -> Self {
        Self {
            id: PlayerId::new(),
            character,
            short_guild_id: None,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn selected_character(&self) -> &SelectedCharacter {
        &self.character
    }

    /// Short id of the character's guild on this server, once registered.
    pub fn short_guild_id(&self) -> Option<GuildShortId> {
        self.short_guild_id
    }

    pub fn set_short_guild_id(&mut self, short_id: GuildShortId) {
        self.short_guild_id = Some(short_id);
    }
}
