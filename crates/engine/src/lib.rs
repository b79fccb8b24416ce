//! WrldLink Engine library.
//!
//! Per-process coordinator that keeps a player's presence consistent
//! across the cluster's online-status and guild directories while the
//! player is in this world-server.
//!
//! ## Structure
//!
//! - `stores/` - In-process state (guild short ids, lifecycle subscriptions)
//! - `use_cases/` - Directory synchronization on world entry and exit
//! - `infrastructure/` - Ports, configuration and logging setup
//! - `context` - Server context composition

pub mod context;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Test fixtures module for integration testing.
#[cfg(test)]
pub mod test_fixtures;

pub use context::{ContextError, Directories, ServerContext};
