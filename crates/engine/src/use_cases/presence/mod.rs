//! Presence use cases.
//!
//! Keeps the online-status and guild directories in step with players
//! entering and leaving this server's world.

use std::sync::Arc;

use async_trait::async_trait;

use crate::infrastructure::ports::{DirectoryError, SharedPlayer};

mod enter_world;
mod leave_world;

pub use enter_world::EnterWorld;
pub use leave_world::LeaveWorld;

#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),
}

/// Reaction to a player's world transitions on this server.
#[async_trait]
pub trait PlayerLifecycleHook: Send + Sync {
    async fn on_entered_world(&self, player: &SharedPlayer) -> Result<(), PresenceError>;
    async fn on_left_world(&self, player: &SharedPlayer) -> Result<(), PresenceError>;
}

/// Container for presence use cases.
pub struct PresenceUseCases {
    pub enter_world: Arc<EnterWorld>,
    pub leave_world: Arc<LeaveWorld>,
}

impl PresenceUseCases {
    pub fn new(enter_world: Arc<EnterWorld>, leave_world: Arc<LeaveWorld>) -> Self {
        Self {
            enter_world,
            leave_world,
        }
    }
}

#[async_trait]
impl PlayerLifecycleHook for PresenceUseCases {
    async fn on_entered_world(&self, player: &SharedPlayer) -> Result<(), PresenceError> {
        self.enter_world.execute(player).await
    }

    async fn on_left_world(&self, player: &SharedPlayer) -> Result<(), PresenceError> {
        self.leave_world.execute(player).await
    }
}
