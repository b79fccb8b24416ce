//! Player lifecycle transitions on a world-server.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A transition a player makes relative to this server's world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerLifecycleEvent {
    /// The player finished loading and is active in the world.
    EnteredWorld,
    /// The player is leaving the world (disconnect, transfer, kick).
    LeftWorld,
}

impl fmt::Display for PlayerLifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnteredWorld => write!(f, "entered_world"),
            Self::LeftWorld => write!(f, "left_world"),
        }
    }
}
