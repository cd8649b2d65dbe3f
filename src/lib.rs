//! confstore - Process-Wide Configuration Registry
//!
//! A key-value configuration store populated from in-memory maps or YAML
//! files, queried by key with explicit failure on absent keys. Stores are
//! plain values constructed by the embedding application; there is no
//! hidden global state.

pub mod error;
pub mod loader;
pub mod store;

// Re-export commonly used types
pub use error::{ConfigError, Result};
pub use store::ConfigStore;

/// Arbitrary configuration value: scalar, sequence, or nested mapping.
pub use serde_yaml::Value;
