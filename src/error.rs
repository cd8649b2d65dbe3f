use thiserror::Error;

/// Main error type for confstore operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration value: {key}")]
    KeyNotFound { key: String },

    #[error("Config file does not exist: {path}")]
    FileNotFound { path: String },

    #[error("Config file is not a top-level mapping: {path}")]
    UnexpectedDocument { path: String },

    #[error("YAML parse error: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    pub fn key_not_found<S: Into<String>>(key: S) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    pub fn file_not_found<S: Into<String>>(path: S) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn unexpected_document<S: Into<String>>(path: S) -> Self {
        Self::UnexpectedDocument { path: path.into() }
    }
}

/// Result type alias for confstore operations
pub type Result<T> = std::result::Result<T, ConfigError>;
