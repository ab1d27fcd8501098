//! Part catalog store with best-effort persistence
//!
//! The in-memory catalog is authoritative. The JSON file behind it is a
//! convenience: unreadable or corrupt files fall back to the demo
//! catalog, and failed writes are logged and dropped.

use crate::{demo_catalog, ConfigError, PartConfig};
use dashmap::DashMap;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Catalog of part configurations keyed by part number
#[derive(Debug)]
pub struct PartStore {
    path: Option<PathBuf>,
    parts: DashMap<String, PartConfig>,
}

impl PartStore {
    /// Create a store with no backing file, seeded with the demo catalog
    #[must_use]
    pub fn in_memory() -> Self {
        let store = Self {
            path: None,
            parts: DashMap::new(),
        };
        store.seed(demo_catalog());
        store
    }

    /// Open a store backed by a JSON catalog file
    ///
    /// Total: a missing, unreadable, or corrupt file logs a warning and
    /// seeds the demo catalog instead. Persistence failures later never
    /// surface either; the file is best-effort throughout.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let store = Self {
            path: Some(path.clone()),
            parts: DashMap::new(),
        };

        match load_catalog(&path) {
            Ok(catalog) => {
                tracing::info!("Loaded {} parts from {}", catalog.len(), path.display());
                store.seed(catalog);
            }
            Err(reason) => {
                tracing::warn!(
                    "Falling back to demo catalog: {} ({})",
                    reason,
                    path.display()
                );
                store.seed(demo_catalog());
            }
        }

        store
    }

    /// Insert or replace a part configuration
    ///
    /// Replacement bumps the stored revision past the one it replaces.
    /// The catalog file is rewritten after the change, fire-and-forget.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration fails validation;
    /// the catalog is untouched in that case.
    pub fn upsert(&self, mut part: PartConfig) -> Result<(), ConfigError> {
        part.validate()?;

        if let Some(existing) = self.parts.get(&part.part_number) {
            part.revision = existing.revision.saturating_add(1);
        }

        tracing::info!(
            "Part {} rev {} saved ({} fields)",
            part.part_number,
            part.revision,
            part.fields.len()
        );
        self.parts.insert(part.part_number.clone(), part);
        self.persist();

        Ok(())
    }

    /// Look up one part by number
    #[must_use]
    pub fn get(&self, part_number: &str) -> Option<PartConfig> {
        self.parts.get(part_number).map(|entry| entry.value().clone())
    }

    /// All parts, sorted by part number
    #[must_use]
    pub fn parts(&self) -> Vec<PartConfig> {
        let mut parts: Vec<PartConfig> = self
            .parts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        parts.sort_by(|a, b| a.part_number.cmp(&b.part_number));
        parts
    }

    /// Remove a part, returning it if present
    pub fn remove(&self, part_number: &str) -> Option<PartConfig> {
        let removed = self.parts.remove(part_number).map(|(_, part)| part);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    /// Number of parts in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    fn seed(&self, catalog: Vec<PartConfig>) {
        for part in catalog {
            self.parts.insert(part.part_number.clone(), part);
        }
    }

    // Fire-and-forget: in-memory state is authoritative, so a failed
    // write is logged and otherwise ignored.
    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };

        let snapshot: IndexMap<String, PartConfig> = self
            .parts()
            .into_iter()
            .map(|part| (part.part_number.clone(), part))
            .collect();

        let result = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(path, json).map_err(|e| e.to_string()));

        if let Err(reason) = result {
            tracing::warn!("Catalog write to {} failed: {}", path.display(), reason);
        }
    }
}

fn load_catalog(path: &Path) -> Result<Vec<PartConfig>, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let catalog: IndexMap<String, PartConfig> =
        serde_json::from_str(&content).map_err(|e| format!("corrupt catalog: {e}"))?;

    let parts: Vec<PartConfig> = catalog.into_values().collect();
    for part in &parts {
        part.validate()
            .map_err(|e| format!("corrupt catalog: {e}"))?;
    }

    Ok(parts)
}
