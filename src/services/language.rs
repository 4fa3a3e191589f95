//! Language metadata lookup
//!
//! A few funboxes are incompatible with languages that render ligatures,
//! so activation needs the current language's attributes. Like the funbox
//! catalog, the lookup is fallible.

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

/// Attributes of a test language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
    #[serde(default)]
    pub ligatures: bool,
}

pub trait LanguageProvider: Send + Sync {
    /// Resolve a language name to its metadata. Fails if the language list
    /// is unavailable or the language is unknown.
    fn get(&self, name: &str) -> anyhow::Result<LanguageInfo>;
}

/// Language list bundled with the crate
#[derive(Debug, Clone)]
pub struct BundledLanguages {
    entries: Vec<LanguageInfo>,
}

impl BundledLanguages {
    pub fn load() -> anyhow::Result<Self> {
        let entries: Vec<LanguageInfo> =
            serde_json::from_str(include_str!("../../assets/languages.json"))
                .context("failed to parse bundled language list")?;
        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<LanguageInfo>) -> Self {
        Self { entries }
    }
}

impl LanguageProvider for BundledLanguages {
    fn get(&self, name: &str) -> anyhow::Result<LanguageInfo> {
        self.entries
            .iter()
            .find(|l| l.name == name)
            .cloned()
            .ok_or_else(|| anyhow!("language not found: {name}"))
    }
}
