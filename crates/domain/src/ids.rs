use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Numeric ids handed out by the persistence layer and the directories.
macro_rules! define_numeric_id {
    ($name:ident, $repr:ty) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($repr);

        impl $name {
            pub const fn new(value: $repr) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $repr {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// Session IDs
define_id!(PlayerId);

// Persistence IDs
define_numeric_id!(CharacterId, u32);
define_numeric_id!(GuildId, u32);

// Directory-assigned IDs
define_numeric_id!(GuildShortId, u16);

/// Identity of a world-server process within the cluster.
///
/// `0xFF` is reserved and means "not on any server"; it is what the
/// online-status directory stores for offline characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerId(u8);

impl ServerId {
    /// Reserved value published for characters that are offline.
    pub const OFFLINE: ServerId = ServerId(0xFF);

    /// Create the identity of a real world-server.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value == Self::OFFLINE.0 {
            return Err(DomainError::ReservedServerId(value));
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn is_offline(self) -> bool {
        self.0 == Self::OFFLINE.0
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_offline() {
            write!(f, "offline")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
