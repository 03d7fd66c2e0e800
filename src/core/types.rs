//! Core data types for the vitrine server.
//!
//! Defines the visualization card served by the API, the per-folder
//! descriptor it is assembled from, and the fixed hello payload.

use serde::{Deserialize, Serialize};

/// Fixed greeting returned by the hello endpoint.
pub const GREETING: &str = "Hello from the backend!";

/// One visualization as presented to the frontend.
///
/// `id` and `url` are always set; everything else may be empty
/// depending on what the descriptor provided and whether an icon
/// file was discovered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationCard {
    /// Stable identifier: the name of the folder the card came from.
    pub id: String,

    /// Display title from the descriptor.
    pub title: String,

    /// Longer description from the descriptor.
    pub description: String,

    /// Public path of the visualization's entry page.
    pub url: String,

    /// Public path of a discovered icon asset, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Ordered category labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Per-folder metadata descriptor (`metadata.toml`).
///
/// All fields are optional; unknown keys are ignored so descriptors
/// can carry extra data for other tools.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardDescriptor {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Payload of the hello endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
    pub status: String,
}
