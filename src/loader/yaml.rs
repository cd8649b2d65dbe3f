//! YAML document and directory loading for `ConfigStore`
//!
//! Files are read with blocking std I/O and parsed with `serde_yaml`; the
//! parsed top-level mapping is applied through `ConfigStore::load` semantics
//! (insert or overwrite per key, no deep merge).

use crate::error::{ConfigError, Result};
use crate::store::ConfigStore;
use serde_yaml::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

impl ConfigStore {
    /// Load a YAML config file into the store.
    ///
    /// Fails with `ConfigError::FileNotFound` when `path` does not refer to
    /// an existing file. Malformed YAML surfaces as
    /// `ConfigError::ParseError`; a document whose top level is not a
    /// mapping fails with `ConfigError::UnexpectedDocument`.
    pub fn load_yaml(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::file_not_found(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        self.load_document(&content, &path.display().to_string())
    }

    /// Load a YAML document from an in-memory string.
    ///
    /// Same semantics as `load_yaml` without the file read.
    pub fn load_yaml_str(&mut self, content: &str) -> Result<()> {
        self.load_document(content, "<string>")
    }

    /// Load every `.yml` file in the directory at `path`.
    ///
    /// Matched files are resolved relative to the supplied directory and
    /// loaded in filename order; entries with any other extension (or none)
    /// are silently skipped. Errors from individual files abort the load,
    /// leaving already-applied values in place.
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let dir = path.as_ref();

        let mut matched = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry_path = entry?.path();
            if entry_path.is_file()
                && entry_path.extension().and_then(OsStr::to_str) == Some("yml")
            {
                matched.push(entry_path);
            }
        }

        // Directory listing order is platform-dependent; sort by filename
        // so repeated loads apply files in the same order.
        matched.sort();

        for file in &matched {
            self.load_yaml(file)?;
        }

        debug!(
            "Loaded {} YAML files from directory: {}",
            matched.len(),
            dir.display()
        );
        Ok(())
    }

    fn load_document(&mut self, content: &str, source: &str) -> Result<()> {
        let document: Value = serde_yaml::from_str(content)?;

        let mapping = match document {
            Value::Mapping(mapping) => mapping,
            // An empty document parses as null; nothing to load.
            Value::Null => return Ok(()),
            _ => return Err(ConfigError::unexpected_document(source)),
        };

        let mut loaded = 0usize;
        for (key, value) in mapping {
            match scalar_key_to_string(&key) {
                Some(key) => {
                    self.set(key, value);
                    loaded += 1;
                }
                None => warn!("Skipping unrepresentable config key in {}: {:?}", source, key),
            }
        }

        debug!("Loaded {} config values from: {}", loaded, source);
        Ok(())
    }
}

/// Convert a scalar YAML key to its string form.
///
/// Numeric and boolean keys keep their YAML rendering; null and structured
/// keys have no string form and yield `None`.
fn scalar_key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
