//! Infrastructure implementations.
//!
//! Contains port traits for external dependencies plus process-level
//! configuration and logging setup.

pub mod config;
pub mod ports;
pub mod telemetry;
