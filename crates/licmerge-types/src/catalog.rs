//! Ordered license catalog owned by a single document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::license::{CatalogEntry, LicenseEntry, LicenseId};

/// The license entries owned by one document, in document order.
///
/// Identifiers are pairwise distinct and only the placeholder may use
/// `NOASSERTION`; [`Catalog::new`] rejects input that violates either rule.
/// A catalog is read-only once built: consumers that need to change an entry
/// clone it out first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, checking identifier uniqueness.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, TypeError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            let id = entry.id();
            if id.is_noassertion() && !entry.is_noassertion() {
                return Err(TypeError::InvalidIdentifier {
                    id: id.to_string(),
                    reason: "reserved for the no-assertion placeholder".into(),
                });
            }
            if !seen.insert(id.clone()) {
                return Err(TypeError::DuplicateIdentifier(id.to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Convenience constructor from concrete entries only.
    pub fn from_licenses(
        licenses: impl IntoIterator<Item = LicenseEntry>,
    ) -> Result<Self, TypeError> {
        Self::new(licenses.into_iter().map(CatalogEntry::from).collect())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Concrete license entries, skipping placeholders.
    pub fn licenses(&self) -> impl Iterator<Item = &LicenseEntry> {
        self.entries.iter().filter_map(CatalogEntry::as_concrete)
    }

    pub fn get(&self, id: &LicenseId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.has_id(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the catalog and hand out its entries.
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<CatalogEntry>::deserialize(deserializer)?;
        Catalog::new(entries).map_err(serde::de::Error::custom)
    }
}
