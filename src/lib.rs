//! Vitrine: static gallery server for browser visualizations
//!
//! Serves a built frontend from disk, plus a small JSON API the
//! frontend polls: a connectivity check and a catalog of
//! visualization cards discovered by scanning the asset tree at
//! startup.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (transport-agnostic)
//!   - config, error, types
//!   - catalog (startup directory scan)
//!   - state (shared handler state)
//!
//! - **http**: Axum adapter (depends on core)
//!   - handlers, middleware, router

// Core domain logic (transport-agnostic)
pub mod core;

// HTTP adapter
pub mod http;

// Re-export commonly used types for convenience
pub use crate::core::catalog::Catalog;
pub use crate::core::config::Config;
pub use crate::core::error::{Result, VitrineError};
pub use crate::core::state::AppState;
pub use crate::core::types::{HelloResponse, VisualizationCard, GREETING};
pub use crate::http::app;
