//! Preset template catalog.
//!
//! Templates are read-only catalog entries supplied by the embedding
//! application; dropping one onto the grid creates an item carrying the
//! template's defaults.

use serde::{Deserialize, Serialize};

/// Defaults applied to items created from a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetTemplate {
    /// Stable identifier for the catalog entry.
    pub key: String,
    /// Default title for items created from this template.
    pub label: String,
    pub standard_duration_minutes: i64,
    /// Default color token.
    pub color: String,
}

/// Ordered, immutable sequence of templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetCatalog {
    templates: Vec<PresetTemplate>,
}

impl PresetCatalog {
    /// Build a catalog, keeping only entries with a positive standard
    /// duration. That is the only validation the engine performs on
    /// catalog data.
    pub fn new(templates: Vec<PresetTemplate>) -> Self {
        let templates = templates
            .into_iter()
            .filter(|t| t.standard_duration_minutes > 0)
            .collect();
        PresetCatalog { templates }
    }

    pub fn get(&self, key: &str) -> Option<&PresetTemplate> {
        self.templates.iter().find(|t| t.key == key)
    }

    pub fn templates(&self) -> &[PresetTemplate] {
        &self.templates
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
