//! Server context and composition.

use std::sync::Arc;

use wrldlink_domain::{PlayerId, PlayerLifecycleEvent, ServerId};

use crate::infrastructure::config::{ConfigError, ServerConfig};
use crate::infrastructure::telemetry;
use crate::infrastructure::ports::{
    GuildDirectory, OnlineStatusDirectory, PlayerRegistry, RegistryError, SharedPlayer,
};
use crate::stores::{Delivery, GuildShortIdCache, LifecycleSubscriptions};
use crate::use_cases::presence::{EnterWorld, LeaveWorld, PresenceError, PresenceUseCases};

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("Presence error: {0}")]
    Presence(#[from] PresenceError),
}

/// Directory client handles supplied at startup.
#[derive(Clone)]
pub struct Directories {
    pub online_status: Arc<dyn OnlineStatusDirectory>,
    pub guild: Arc<dyn GuildDirectory>,
}

/// Everything one world-server process needs to keep player presence in
/// step with the cluster directories.
///
/// Wraps the player registry: admitted players get the presence hooks
/// subscribed to their lifecycle, removed players lose them before the
/// registry forgets them.
pub struct ServerContext {
    server_id: ServerId,
    directories: Directories,
    guild_short_ids: Arc<GuildShortIdCache>,
    registry: Arc<dyn PlayerRegistry>,
    subscriptions: LifecycleSubscriptions,
    presence: Arc<PresenceUseCases>,
}

impl ServerContext {
    /// Create a new context with all dependencies wired up.
    pub fn new(
        config: &ServerConfig,
        directories: Directories,
        registry: Arc<dyn PlayerRegistry>,
    ) -> Self {
        let server_id = config.server_id;
        let guild_short_ids = Arc::new(GuildShortIdCache::new());

        let enter_world = Arc::new(EnterWorld::new(
            directories.online_status.clone(),
            directories.guild.clone(),
            guild_short_ids.clone(),
            server_id,
        ));
        let leave_world = Arc::new(LeaveWorld::new(
            directories.online_status.clone(),
            directories.guild.clone(),
            server_id,
        ));

        tracing::info!(server_id = %server_id, "Server context created");

        Self {
            server_id,
            directories,
            guild_short_ids,
            registry,
            subscriptions: LifecycleSubscriptions::new(),
            presence: Arc::new(PresenceUseCases::new(enter_world, leave_world)),
        }
    }

    /// Build a context for the hosting process: read settings from the
    /// environment (and `.env.local`/`.env`), install logging, then wire up.
    pub fn bootstrap(
        directories: Directories,
        registry: Arc<dyn PlayerRegistry>,
    ) -> Result<Self, ContextError> {
        let config = ServerConfig::from_env()?;
        Ok(Self::from_config(&config, directories, registry))
    }

    /// Like [`ServerContext::bootstrap`], with settings read through `lookup`.
    pub fn bootstrap_with<F>(
        lookup: F,
        directories: Directories,
        registry: Arc<dyn PlayerRegistry>,
    ) -> Result<Self, ContextError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ServerConfig::from_lookup(lookup)?;
        Ok(Self::from_config(&config, directories, registry))
    }

    fn from_config(
        config: &ServerConfig,
        directories: Directories,
        registry: Arc<dyn PlayerRegistry>,
    ) -> Self {
        if telemetry::init_tracing(&config.log_filter).is_err() {
            tracing::debug!("Tracing subscriber already installed");
        }
        Self::new(config, directories, registry)
    }

    pub fn server_id(&self) -> ServerId {
        self.server_id
    }

    pub fn online_status_directory(&self) -> &Arc<dyn OnlineStatusDirectory> {
        &self.directories.online_status
    }

    pub fn guild_directory(&self) -> &Arc<dyn GuildDirectory> {
        &self.directories.guild
    }

    /// The guild short id cache, for components resolving protocol short ids.
    pub fn guild_short_ids(&self) -> &Arc<GuildShortIdCache> {
        &self.guild_short_ids
    }

    pub fn is_subscribed(&self, player_id: PlayerId) -> bool {
        self.subscriptions.is_subscribed(player_id)
    }

    pub fn subscribed_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Admit a player to the registry and subscribe the presence hooks.
    ///
    /// Nothing is subscribed if the registry rejects the player.
    pub async fn add_player(&self, player: SharedPlayer) -> Result<(), ContextError> {
        let player_id = player.read().await.id();
        self.registry.add_player(player).await?;
        self.subscriptions.subscribe(player_id, self.presence.clone());
        tracing::info!(player_id = %player_id, server_id = %self.server_id, "Player added");
        Ok(())
    }

    /// Unsubscribe the presence hooks, then remove the player from the registry.
    ///
    /// `None` is accepted and ignored.
    pub async fn remove_player(&self, player: Option<&SharedPlayer>) -> Result<(), ContextError> {
        let Some(player) = player else {
            tracing::debug!("Ignoring removal of absent player");
            return Ok(());
        };

        let player_id = player.read().await.id();
        self.subscriptions.unsubscribe(player_id);
        self.registry.remove_player(player).await?;
        tracing::info!(player_id = %player_id, server_id = %self.server_id, "Player removed");
        Ok(())
    }

    /// Report that a player became active in this server's world.
    pub async fn player_entered_world(
        &self,
        player: &SharedPlayer,
    ) -> Result<Delivery, ContextError> {
        Ok(self
            .subscriptions
            .dispatch(player, PlayerLifecycleEvent::EnteredWorld)
            .await?)
    }

    /// Report that a player is leaving this server's world.
    pub async fn player_left_world(
        &self,
        player: &SharedPlayer,
    ) -> Result<Delivery, ContextError> {
        Ok(self
            .subscriptions
            .dispatch(player, PlayerLifecycleEvent::LeftWorld)
            .await?)
    }
}
