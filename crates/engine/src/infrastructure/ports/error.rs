//! Error types for port operations.

use wrldlink_domain::PlayerId;

/// Failures reported by a remote directory client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// The directory could not be reached.
    #[error("{directory} directory unavailable")]
    Unavailable { directory: &'static str },

    /// The directory answered but refused the update.
    #[error("{directory} directory rejected the request: {message}")]
    Rejected {
        directory: &'static str,
        message: String,
    },

    /// The call failed in the transport layer.
    #[error("Directory transport error: {0}")]
    Transport(String),
}

impl DirectoryError {
    pub fn unavailable(directory: &'static str) -> Self {
        Self::Unavailable { directory }
    }

    pub fn rejected(directory: &'static str, message: impl ToString) -> Self {
        Self::Rejected {
            directory,
            message: message.to_string(),
        }
    }

    pub fn transport(message: impl ToString) -> Self {
        Self::Transport(message.to_string())
    }
}

/// Errors from the player registry's base bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Player already registered: {0}")]
    AlreadyRegistered(PlayerId),
    #[error("Player not registered: {0}")]
    NotRegistered(PlayerId),
    #[error("Player registry is full ({capacity} players)")]
    Full { capacity: usize },
}
