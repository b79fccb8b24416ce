//! Per-player lifecycle notification channel.
//!
//! The server context registers a hook for every admitted player. The
//! world-entry machinery reports transitions through [`LifecycleSubscriptions::dispatch`],
//! which runs the hook on every event while the player is subscribed.
//! Removing the subscription stops all further deliveries for that player.
//! Keeping enter/leave events paired is the raiser's job.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use wrldlink_domain::{PlayerId, PlayerLifecycleEvent};

use crate::infrastructure::ports::SharedPlayer;
use crate::use_cases::presence::{PlayerLifecycleHook, PresenceError};

/// Outcome of dispatching a lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The hook ran.
    Delivered,
    /// Nobody is subscribed for the player.
    NotSubscribed,
}

/// Registered lifecycle interest, keyed by player.
#[derive(Default)]
pub struct LifecycleSubscriptions {
    hooks: DashMap<PlayerId, Arc<dyn PlayerLifecycleHook>>,
}

impl LifecycleSubscriptions {
    pub fn new() -> Self {
        Self {
            hooks: DashMap::new(),
        }
    }

    /// Subscribe `hook` to a player's transitions.
    ///
    /// Returns `false` and keeps the existing subscription if the player is
    /// already subscribed.
    pub fn subscribe(&self, player_id: PlayerId, hook: Arc<dyn PlayerLifecycleHook>) -> bool {
        match self.hooks.entry(player_id) {
            Entry::Occupied(_) => {
                tracing::warn!(
                    player_id = %player_id,
                    "Player already subscribed to lifecycle events"
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(hook);
                tracing::debug!(player_id = %player_id, "Subscribed to player lifecycle events");
                true
            }
        }
    }

    pub fn unsubscribe(&self, player_id: PlayerId) -> bool {
        let removed = self.hooks.remove(&player_id).is_some();
        if removed {
            tracing::debug!(player_id = %player_id, "Unsubscribed from player lifecycle events");
        }
        removed
    }

    pub fn is_subscribed(&self, player_id: PlayerId) -> bool {
        self.hooks.contains_key(&player_id)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Deliver `event` for `player` to its subscribed hook. Hook errors are
    /// returned as-is.
    pub async fn dispatch(
        &self,
        player: &SharedPlayer,
        event: PlayerLifecycleEvent,
    ) -> Result<Delivery, PresenceError> {
        let player_id = player.read().await.id();

        let Some(hook) = self.hooks.get(&player_id).map(|entry| entry.value().clone()) else {
            tracing::debug!(
                player_id = %player_id,
                event = %event,
                "No lifecycle subscription"
            );
            return Ok(Delivery::NotSubscribed);
        };

        match event {
            PlayerLifecycleEvent::EnteredWorld => hook.on_entered_world(player).await?,
            PlayerLifecycleEvent::LeftWorld => hook.on_left_world(player).await?,
        }
        Ok(Delivery::Delivered)
    }
}
