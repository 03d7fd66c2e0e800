//! Core domain logic (transport-agnostic)
//!
//! This module contains all business logic that is independent of the
//! HTTP transport.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **catalog**: Startup scan of the visualization directory
//! - **state**: Shared handler state

pub mod catalog;
pub mod config;
pub mod error;
pub mod state;
pub mod types;

// Re-export key types for convenience
pub use catalog::Catalog;
pub use config::Config;
pub use error::{Result, VitrineError};
pub use state::AppState;
pub use types::{CardDescriptor, HelloResponse, VisualizationCard, GREETING};
