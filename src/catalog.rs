//! Static table mapping issue codes to their classification and weight.
//!
//! The catalog classifies and documents codes; it does not detect anything.
//! Callers may extend or override entries through
//! [`crate::config::TesterOptions::error_codes`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{IssueCode, IssueType};

/// One catalog row: classification, human description, severity weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub description: String,
    pub weight: u32,
}

impl CatalogEntry {
    pub fn new(issue_type: IssueType, description: impl Into<String>, weight: u32) -> Self {
        Self {
            issue_type,
            description: description.into(),
            weight,
        }
    }
}

/// Code-indexed catalog of known findings.
#[derive(Debug, Clone)]
pub struct IssueCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Default for IssueCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IssueCatalog {
    /// The built-in reference catalog.
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            "E101".to_string(),
            CatalogEntry::new(IssueType::Error, "Components overlap each other", 10),
        );
        entries.insert(
            "E201".to_string(),
            CatalogEntry::new(
                IssueType::Error,
                "Content extends beyond its parent container",
                10,
            ),
        );
        entries.insert(
            "E301".to_string(),
            CatalogEntry::new(IssueType::Error, "Component extends beyond the viewport", 10),
        );
        entries.insert(
            "W201".to_string(),
            CatalogEntry::new(
                IssueType::Warning,
                "Components are spaced closer than the minimum gap",
                5,
            ),
        );
        entries.insert(
            "W202".to_string(),
            CatalogEntry::new(IssueType::Warning, "Sibling spacing is uneven", 5),
        );
        entries.insert(
            "I401".to_string(),
            CatalogEntry::new(IssueType::Info, "Components share an alignment edge", 1),
        );
        Self { entries }
    }

    /// Merge caller-supplied entries, overriding built-ins on collision.
    pub fn extend(&mut self, overrides: impl IntoIterator<Item = (String, CatalogEntry)>) {
        for (code, entry) in overrides {
            self.entries.insert(code, entry);
        }
    }

    pub fn entry(&self, code: &IssueCode) -> Option<&CatalogEntry> {
        self.entries.get(code.as_str())
    }

    /// The catalog's classification for a code, if it has one.
    pub fn classify(&self, code: &IssueCode) -> Option<IssueType> {
        self.entry(code).map(|e| e.issue_type)
    }

    pub fn describe(&self, code: &IssueCode) -> Option<&str> {
        self.entry(code).map(|e| e.description.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
