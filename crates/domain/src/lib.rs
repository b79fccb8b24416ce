//! WrldLink domain vocabulary.
//!
//! Pure types shared by the presence engine: ids, the player session and
//! its selected character, guild membership and lifecycle events.

pub mod error;
pub mod events;
pub mod ids;
pub mod player;

pub use error::DomainError;
pub use events::PlayerLifecycleEvent;
pub use ids::{CharacterId, GuildId, GuildShortId, PlayerId, ServerId};
pub use player::{GuildMembership, GuildPosition, Player, SelectedCharacter};
