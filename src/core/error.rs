//! Error types and error handling for the vitrine server.
//!
//! Request handlers never fail: they read frozen state and serialize
//! it. Errors therefore only travel the startup path (configuration
//! loading, catalog scanning, socket binding), and the caller decides
//! per call site whether an error is fatal or degrades the service.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for vitrine operations
pub type Result<T> = std::result::Result<T, VitrineError>;

/// Main error type for the vitrine server
#[derive(Error, Debug)]
pub enum VitrineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The catalog root itself could not be read. Individual broken
    /// entries under the root never produce this; they are skipped.
    #[error("Catalog directory {path:?} is unreadable: {source}")]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}
