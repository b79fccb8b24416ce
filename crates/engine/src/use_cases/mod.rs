//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod presence;

// Re-export main types
pub use presence::{PlayerLifecycleHook, PresenceError, PresenceUseCases};
