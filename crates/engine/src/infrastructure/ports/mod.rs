//! Port traits for infrastructure boundaries.
//!
//! Every collaborator the engine does not own sits behind a port:
//! - The online-status directory (served by the friend server)
//! - The guild directory (guild server)
//! - The local player registry

mod directories;
mod error;
mod registry;

pub use directories::{GuildDirectory, OnlineStatusDirectory};
pub use error::{DirectoryError, RegistryError};
pub use registry::{PlayerRegistry, SharedPlayer};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use directories::{MockGuildDirectory, MockOnlineStatusDirectory};

#[cfg(test)]
pub use registry::MockPlayerRegistry;
