//! HTTP adapter
//!
//! Depends only on core/. Wires the API handlers, request logging,
//! CORS, and the static asset fallback into one Axum router.

pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::*;
pub use router::app;
