//! The consolidated catalog produced by a merge.

use std::collections::HashSet;

use licmerge_refs::AllocationError;
use licmerge_types::{Catalog, CatalogEntry, LicenseEntry, LicenseId, TypeError};
use serde::{Serialize, Serializer};

/// Append-only, ordered license catalog.
///
/// Entries are owned copies; once appended they are never removed, edited,
/// or reordered. Identifiers are pairwise distinct at all times.
#[derive(Clone, Debug, Default)]
pub struct MergedCatalog {
    entries: Vec<CatalogEntry>,
    ids: HashSet<LicenseId>,
}

impl MergedCatalog {
    /// Seed from the master catalog, keeping its identifiers and order.
    pub(crate) fn seed(master: Catalog) -> Self {
        let entries = master.into_entries();
        let ids = entries.iter().map(CatalogEntry::id).collect();
        Self { entries, ids }
    }

    /// Append an entry whose identifier must not be present yet.
    pub(crate) fn append(&mut self, entry: CatalogEntry) -> Result<(), AllocationError> {
        let id = entry.id();
        if self.ids.contains(&id) {
            return Err(AllocationError::Collision { id: id.to_string() });
        }
        self.ids.insert(id);
        self.entries.push(entry);
        Ok(())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Concrete license entries, in catalog order.
    pub fn licenses(&self) -> impl Iterator<Item = &LicenseEntry> {
        self.entries.iter().filter_map(CatalogEntry::as_concrete)
    }

    pub fn get(&self, id: &LicenseId) -> Option<&CatalogEntry> {
        if !self.ids.contains(id) {
            return None;
        }
        self.entries.iter().find(|e| e.has_id(id))
    }

    pub fn contains_id(&self, id: &LicenseId) -> bool {
        self.ids.contains(id)
    }

    pub fn has_noassertion(&self) -> bool {
        self.ids.contains(&LicenseId::noassertion())
    }

    /// Identifiers in catalog order.
    pub fn identifiers(&self) -> impl Iterator<Item = LicenseId> + '_ {
        self.entries.iter().map(CatalogEntry::id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert into a plain [`Catalog`] for handing to writers.
    pub fn into_catalog(self) -> Result<Catalog, TypeError> {
        Catalog::new(self.entries)
    }
}

impl Serialize for MergedCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lic(id: &str, text: &str) -> LicenseEntry {
        LicenseEntry::new(LicenseId::new(id).unwrap(), text)
    }

    #[test]
    fn seed_keeps_order_and_ids() {
        let master = Catalog::from_licenses([lic("B", "b"), lic("A", "a")]).unwrap();
        let merged = MergedCatalog::seed(master);
        let ids: Vec<_> = merged.identifiers().map(String::from).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert!(merged.contains_id(&LicenseId::new("A").unwrap()));
    }

    #[test]
    fn append_rejects_collision() {
        let mut merged = MergedCatalog::seed(Catalog::from_licenses([lic("A", "a")]).unwrap());
        let err = merged.append(lic("A", "other").into()).unwrap_err();
        assert_eq!(err, AllocationError::Collision { id: "A".into() });
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn append_grows_in_order() {
        let mut merged = MergedCatalog::default();
        merged.append(lic("X", "x").into()).unwrap();
        merged.append(CatalogEntry::NoAssertion).unwrap();
        merged.append(lic("Y", "y").into()).unwrap();
        assert_eq!(merged.len(), 3);
        assert!(merged.has_noassertion());
        assert_eq!(merged.licenses().count(), 2);
        assert_eq!(
            merged.get(&LicenseId::new("Y").unwrap()).unwrap().as_concrete().unwrap().text(),
            "y"
        );
    }

    #[test]
    fn serializes_as_entry_list() {
        let merged = MergedCatalog::seed(Catalog::from_licenses([lic("A", "a")]).unwrap());
        let value = serde_json::to_value(&merged).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn into_catalog_round_trips_entries() {
        let merged = MergedCatalog::seed(Catalog::from_licenses([lic("A", "a")]).unwrap());
        let catalog = merged.clone().into_catalog().unwrap();
        assert_eq!(catalog.entries(), merged.entries());
    }
}
