//! In-memory state storage modules.
//!
//! Stores manage runtime state that doesn't belong to any directory:
//! - `GuildShortIdCache` - guild id to protocol short id mapping
//! - `LifecycleSubscriptions` - per-player lifecycle hook registrations

pub mod guild_short_ids;
pub mod lifecycle;

// Re-export store types
pub use guild_short_ids::GuildShortIdCache;
pub use lifecycle::{Delivery, LifecycleSubscriptions};
