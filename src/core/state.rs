//! Shared application state handed to every request handler.

use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::config::Config;

/// State cloned into each handler.
///
/// Both fields are behind `Arc`, so cloning is cheap and every clone
/// observes the same catalog built at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}
