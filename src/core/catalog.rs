//! Startup catalog of visualization cards.
//!
//! The catalog is built once at startup by scanning the
//! `Visualizations/` directory inside the asset tree. Each immediate
//! subdirectory that carries a `metadata.toml` descriptor becomes one
//! card; everything else is skipped with a log line. Handlers only
//! ever read the finished catalog, so no locking is involved.

use std::fmt;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use walkdir::WalkDir;

use crate::core::error::{Result, VitrineError};
use crate::core::types::{CardDescriptor, VisualizationCard};

/// Subdirectory of the asset tree that holds the visualization entries.
pub const CATALOG_DIR: &str = "Visualizations";

/// Descriptor file expected inside each entry directory.
pub const DESCRIPTOR_FILE: &str = "metadata.toml";

/// Page each card links to.
pub const ENTRY_FILE: &str = "index.html";

/// Glob matched against entry files to locate a card icon.
static ICON_PATTERN: Lazy<glob::Pattern> =
    Lazy::new(|| glob::Pattern::new("icon.*").expect("valid icon pattern"));

/// Immutable collection of visualization cards, in scan order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cards: Vec<VisualizationCard>,
}

/// Result of inspecting one directory entry during the scan.
enum EntryOutcome {
    Card(VisualizationCard),
    Skipped(SkipReason),
}

/// Why a directory entry did not become a card.
enum SkipReason {
    MissingDescriptor,
    BadDescriptor(String),
    NonUtf8Name,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDescriptor => write!(f, "no {DESCRIPTOR_FILE}"),
            Self::BadDescriptor(msg) => write!(f, "invalid {DESCRIPTOR_FILE}: {msg}"),
            Self::NonUtf8Name => write!(f, "directory name is not valid UTF-8"),
        }
    }
}

impl Catalog {
    /// Scan `dist_dir` and build the catalog.
    ///
    /// Entries are visited in lexicographic order so card order is
    /// stable across restarts. A broken entry never aborts the scan;
    /// only an unreadable `Visualizations/` directory itself is an
    /// error, and the caller decides whether that is fatal.
    pub fn load(dist_dir: impl AsRef<Path>) -> Result<Self> {
        let root = dist_dir.as_ref().join(CATALOG_DIR);

        // Open the root up front: walkdir reports per-entry errors,
        // but a missing or unreadable root must surface as one.
        fs::read_dir(&root).map_err(|e| VitrineError::CatalogUnreadable {
            path: root.clone(),
            source: e,
        })?;

        let mut cards = Vec::new();

        for entry in WalkDir::new(&root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable catalog entry: {e}");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                tracing::debug!("Ignoring non-directory {:?}", entry.path());
                continue;
            }

            match load_entry(entry.path()) {
                EntryOutcome::Card(card) => {
                    tracing::info!(
                        "Loaded visualization: {} ({}) with icon: {}",
                        card.title,
                        card.id,
                        card.icon.as_deref().unwrap_or("none")
                    );
                    cards.push(card);
                }
                EntryOutcome::Skipped(reason) => match reason {
                    SkipReason::MissingDescriptor => {
                        tracing::debug!("Skipping {:?}: {reason}", entry.path());
                    }
                    _ => {
                        tracing::warn!("Skipping {:?}: {reason}", entry.path());
                    }
                },
            }
        }

        tracing::info!("Loaded {} visualizations", cards.len());

        Ok(Self { cards })
    }

    /// Build a catalog from an existing card list.
    pub fn from_cards(cards: Vec<VisualizationCard>) -> Self {
        Self { cards }
    }

    /// All cards, in scan order.
    pub fn cards(&self) -> &[VisualizationCard] {
        &self.cards
    }

    /// At most the first `n` cards.
    pub fn first(&self, n: usize) -> &[VisualizationCard] {
        &self.cards[..self.cards.len().min(n)]
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Inspect one entry directory and build its card.
fn load_entry(dir: &Path) -> EntryOutcome {
    let id = match dir.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.to_string(),
        None => return EntryOutcome::Skipped(SkipReason::NonUtf8Name),
    };

    let descriptor_path = dir.join(DESCRIPTOR_FILE);
    if !descriptor_path.is_file() {
        return EntryOutcome::Skipped(SkipReason::MissingDescriptor);
    }

    let descriptor: CardDescriptor = match fs::read_to_string(&descriptor_path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(descriptor) => descriptor,
            Err(e) => return EntryOutcome::Skipped(SkipReason::BadDescriptor(e.to_string())),
        },
        Err(e) => return EntryOutcome::Skipped(SkipReason::BadDescriptor(e.to_string())),
    };

    let icon = find_icon(dir, &id);

    EntryOutcome::Card(VisualizationCard {
        url: format!("/{CATALOG_DIR}/{id}/{ENTRY_FILE}"),
        id,
        title: descriptor.title,
        description: descriptor.description,
        icon,
        tags: descriptor.tags,
    })
}

/// Locate the entry's icon file, if any.
///
/// Any file matching `icon.*` qualifies; when several do, the
/// lexicographically first wins so the choice is deterministic.
fn find_icon(dir: &Path, id: &str) -> Option<String> {
    let entries = fs::read_dir(dir).ok()?;

    let mut matches: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|ty| ty.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| ICON_PATTERN.matches(name))
        .collect();

    matches.sort();
    matches
        .first()
        .map(|name| format!("/{CATALOG_DIR}/{id}/{name}"))
}
