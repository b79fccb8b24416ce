//! Directory client ports.
//!
//! Each directory is a remote service owned by another process. Calls are
//! awaited in order by the presence use cases; retry and timeout policy is
//! the client implementation's business.

use async_trait::async_trait;
use wrldlink_domain::{CharacterId, GuildId, GuildShortId, ServerId};

use super::error::DirectoryError;

/// Cluster-wide record of which server each character is online on.
///
/// Backed by the friend server, which uses it to show friends' status.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OnlineStatusDirectory: Send + Sync {
    /// Publish the server a character is on. `ServerId::OFFLINE` marks it offline.
    async fn set_online_state(
        &self,
        character_id: CharacterId,
        character_name: &str,
        server_id: ServerId,
    ) -> Result<(), DirectoryError>;
}

/// Cluster-wide guild membership directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuildDirectory: Send + Sync {
    /// Register a member as playing on `server_id`, returning the guild's
    /// short id for that server.
    async fn member_enter_game(
        &self,
        guild_id: GuildId,
        character_name: &str,
        server_id: ServerId,
    ) -> Result<GuildShortId, DirectoryError>;

    async fn member_leave_game(
        &self,
        guild_id: GuildId,
        character_name: &str,
        server_id: ServerId,
    ) -> Result<(), DirectoryError>;
}
