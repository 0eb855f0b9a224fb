//! Loading and lookup for the emoji image catalog
//!
//! The catalog is a JSON object mapping emoji name to an object mapping
//! size label ("160"/"320") to an absolute image URL. It is loaded once at
//! startup and never mutated; a missing or malformed file is fatal.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::types::SizeLabel;

/// Size variants available for one emoji name
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct EmojiEntry {
    sizes: BTreeMap<SizeLabel, String>,
}

impl EmojiEntry {
    /// URL for the given size, if that variant exists
    pub fn url(&self, size: SizeLabel) -> Option<&str> {
        self.sizes.get(&size).map(String::as_str)
    }

    /// Size labels present for this entry, ascending
    pub fn available_sizes(&self) -> Vec<SizeLabel> {
        self.sizes.keys().copied().collect()
    }
}

/// Immutable in-memory emoji catalog, keyed by name.
///
/// BTreeMap keys give the ascending lexicographic order that `get_emojis`
/// reports and the deterministic iteration order used as the search
/// tie-break order.
#[derive(Debug)]
pub struct EmojiDataset {
    entries: BTreeMap<String, EmojiEntry>,
}

impl EmojiDataset {
    /// Load the catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading emoji dataset from {}", path.display());

        let file = File::open(path)
            .with_context(|| format!("Failed to open emoji dataset: {}", path.display()))?;
        let reader = BufReader::new(file);
        let entries: BTreeMap<String, EmojiEntry> = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse emoji dataset: {}", path.display()))?;

        for (name, entry) in &entries {
            if entry.sizes.is_empty() {
                bail!("Emoji entry {:?} has no size variants", name);
            }
        }

        info!("Loaded {} emoji entries", entries.len());

        Ok(Self { entries })
    }

    /// Build a dataset directly from entries (used by tests)
    pub fn from_entries(entries: BTreeMap<String, EmojiEntry>) -> Self {
        Self { entries }
    }

    /// Exact case-sensitive lookup by name
    pub fn get(&self, name: &str) -> Option<&EmojiEntry> {
        self.entries.get(name)
    }

    /// All emoji names, ascending lexicographic
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
