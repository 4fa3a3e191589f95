//! Funbox catalog lookup
//!
//! Modifier descriptors come from an external catalog. The lookup can fail
//! (catalog unavailable), which the controller recovers from by reverting
//! to "none". A bundled JSON catalog backs the driver binary and tests.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Coarse classification of a modifier's effect style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunboxCategory {
    /// Visual-theme-like: swaps in a funbox stylesheet
    Style,
    /// Behavior-script-like: changes input handling or text generation
    Script,
}

/// Immutable descriptor for a single funbox modifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunboxDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub category: FunboxCategory,
    #[serde(default, rename = "affectsWordGeneration")]
    pub affects_word_generation: bool,
}

/// Modifier metadata lookup. Both operations are fallible: the catalog may
/// be unavailable. An unknown name is not an error, it resolves to `None`.
pub trait FunboxCatalog: Send + Sync {
    fn get(&self, name: &str) -> anyhow::Result<Option<FunboxDescriptor>>;
    fn list(&self) -> anyhow::Result<Vec<FunboxDescriptor>>;
}

/// Catalog backed by the JSON list bundled with the crate
#[derive(Debug, Clone)]
pub struct BundledCatalog {
    entries: Vec<FunboxDescriptor>,
}

impl BundledCatalog {
    /// Deserialize the bundled funbox list
    pub fn load() -> anyhow::Result<Self> {
        let entries: Vec<FunboxDescriptor> =
            serde_json::from_str(include_str!("../../assets/funbox.json"))
                .context("failed to parse bundled funbox catalog")?;
        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<FunboxDescriptor>) -> Self {
        Self { entries }
    }
}

impl FunboxCatalog for BundledCatalog {
    fn get(&self, name: &str) -> anyhow::Result<Option<FunboxDescriptor>> {
        Ok(self.entries.iter().find(|f| f.name == name).cloned())
    }

    fn list(&self) -> anyhow::Result<Vec<FunboxDescriptor>> {
        Ok(self.entries.clone())
    }
}
