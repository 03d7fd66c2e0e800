//! Configuration management for the vitrine server.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, VitrineError};

/// Config file name looked up in the working directory.
const LOCAL_CONFIG_FILE: &str = "vitrine.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Static asset configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetsConfig {
    /// Directory containing the built frontend
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

/// Catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Maximum number of cards the visualizations endpoint returns
    #[serde(default = "default_max_cards")]
    pub max_cards: usize,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("../frontend/dist")
}

fn default_max_cards() -> usize {
    16
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_cards: default_max_cards(),
        }
    }
}

impl ServerConfig {
    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| VitrineError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// An explicit path (from the CLI or `VITRINE_CONFIG`) skips
    /// discovery; otherwise `./vitrine.toml` is tried first, then the
    /// user config directory (`<config dir>/vitrine/config.toml`).
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => Self::discover()?,
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Find and load a config file, falling back to defaults.
    fn discover() -> Result<Self> {
        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(local);
        }

        if let Some(user) = Self::user_config_file() {
            if user.exists() {
                return Self::from_file(user);
            }
        }

        Ok(Self::default())
    }

    /// Per-user config file path (`~/.config/vitrine/config.toml` on Linux).
    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vitrine").join("config.toml"))
    }

    /// Merge configuration with environment variables
    ///
    /// `PORT` and `DIST_PATH` are accepted as fallbacks for the
    /// `VITRINE_*` names so plain container deployments keep working.
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("VITRINE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("VITRINE_PORT").or_else(|_| env::var("PORT")) {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Asset configuration
        if let Ok(dist) = env::var("VITRINE_DIST_DIR").or_else(|_| env::var("DIST_PATH")) {
            self.assets.dist_dir = PathBuf::from(dist);
        }

        // Catalog configuration
        if let Ok(max_cards) = env::var("VITRINE_MAX_CARDS") {
            if let Ok(n) = max_cards.parse() {
                self.catalog.max_cards = n;
            }
        }
    }

    /// Merge configuration with command-line values
    ///
    /// Flags win over both the config file and the environment, so
    /// this runs after `merge_env`.
    pub fn merge_cli(
        &mut self,
        host: Option<String>,
        port: Option<u16>,
        dist_dir: Option<PathBuf>,
    ) {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(dist_dir) = dist_dir {
            self.assets.dist_dir = dist_dir;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(VitrineError::ConfigError(
                "Listen host must not be empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(VitrineError::ConfigError(
                "Listen port must be non-zero".to_string(),
            ));
        }

        if self.assets.dist_dir.as_os_str().is_empty() {
            return Err(VitrineError::ConfigError(
                "Asset directory must not be empty".to_string(),
            ));
        }

        if self.catalog.max_cards == 0 {
            return Err(VitrineError::ConfigError(
                "Max cards must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Host: {}", self.server.host);
        tracing::info!("  Port: {}", self.server.port);
        tracing::info!("  Asset dir: {:?}", self.assets.dist_dir);
        tracing::info!("  Max cards: {}", self.catalog.max_cards);
    }
}
