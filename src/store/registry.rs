//! In-memory configuration registry
//!
//! The store owns every loaded value for its own lifetime. Keys are unique
//! and the last write wins; values are arbitrary YAML-shaped data with no
//! schema imposed here.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;

/// A registry of configuration values keyed by string.
///
/// Created empty and populated through `set`, `load` or the YAML loaders.
/// There is no internal locking: embedding applications that share a store
/// across threads must serialize access themselves.
///
/// `Value::Null` is a valid stored value and is returned as such by `get`;
/// storing null is not equivalent to leaving a key unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigStore {
    values: HashMap<String, Value>,
}

impl ConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config value stored under `key`.
    ///
    /// Fails with `ConfigError::KeyNotFound` if the key was never set or the
    /// store has been cleared since. There is no default-value mechanism.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.values
            .get(key)
            .ok_or_else(|| ConfigError::key_not_found(key))
    }

    /// Insert or overwrite the value for `key`.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.values.insert(key.into(), value.into());
    }

    /// Load an associative structure of config values.
    ///
    /// Pairs are applied in iteration order via `set`, so keys already
    /// present in the store are overwritten. The whole value at a key is
    /// replaced; nested mappings are not merged.
    pub fn load<I, K, V>(&mut self, mapping: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in mapping {
            self.set(key, value);
        }
    }

    /// Clear out all config values. Irreversible.
    pub fn clear_all(&mut self) {
        self.values.clear();
    }

    /// Check whether a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no values are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the stored keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
