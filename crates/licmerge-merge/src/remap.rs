//! Per-document identifier remapping.
//!
//! A [`RemapTable`] tells the reference-rewriting pass, for one secondary
//! document, which consolidated entry each of the document's original
//! license identifiers now resolves to.

use std::collections::{BTreeMap, HashMap};

use licmerge_types::{DocumentId, LicenseEntry, LicenseId};
use serde::{Serialize, Serializer};

/// Why an original entry maps where it does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemapKind {
    /// The text was already present; the entry resolves to the existing one.
    Deduplicated,
    /// The text was new; the entry was appended under a fresh identifier.
    Renamed,
}

/// One row of a remap table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Remap {
    /// The entry as it appeared in the secondary document.
    pub original: LicenseEntry,
    /// Identifier of the entry it resolves to in the merged catalog.
    pub target: LicenseId,
    pub kind: RemapKind,
}

impl Remap {
    pub fn original_id(&self) -> &LicenseId {
        self.original.id()
    }

    /// Returns `true` if the identifier did not change.
    pub fn is_identity(&self) -> bool {
        self.original.id() == &self.target
    }
}

/// Ordered mapping from a document's original identifiers to merged ones.
#[derive(Clone, Debug, Default)]
pub struct RemapTable {
    rows: Vec<Remap>,
    index: HashMap<LicenseId, usize>,
}

impl RemapTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a row. Original identifiers are unique within a catalog, so a
    /// second row for the same identifier replaces the first.
    pub(crate) fn record(&mut self, original: LicenseEntry, target: LicenseId, kind: RemapKind) {
        let remap = Remap {
            original,
            target,
            kind,
        };
        match self.index.get(remap.original_id()) {
            Some(&pos) => self.rows[pos] = remap,
            None => {
                self.index.insert(remap.original_id().clone(), self.rows.len());
                self.rows.push(remap);
            }
        }
    }

    pub fn get(&self, original: &LicenseId) -> Option<&Remap> {
        self.index.get(original).map(|&pos| &self.rows[pos])
    }

    /// The merged identifier `original` now resolves to.
    pub fn target(&self, original: &LicenseId) -> Option<&LicenseId> {
        self.get(original).map(|r| &r.target)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Remap> {
        self.rows.iter()
    }

    /// Rows whose entry was appended under a fresh identifier.
    pub fn renamed(&self) -> impl Iterator<Item = &Remap> {
        self.rows.iter().filter(|r| r.kind == RemapKind::Renamed)
    }

    /// Rows whose entry resolved to one already in the merged catalog.
    pub fn deduplicated(&self) -> impl Iterator<Item = &Remap> {
        self.rows.iter().filter(|r| r.kind == RemapKind::Deduplicated)
    }

    /// Plain `old id -> new id` mapping for rewriting references.
    pub fn to_id_map(&self) -> BTreeMap<String, String> {
        self.rows
            .iter()
            .map(|r| (r.original_id().to_string(), r.target.to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl PartialEq for RemapTable {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl Eq for RemapTable {}

impl Serialize for RemapTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

/// The remap table produced for one secondary document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocumentRemap {
    pub document: DocumentId,
    pub table: RemapTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> LicenseId {
        LicenseId::new(s).unwrap()
    }

    fn lic(s: &str) -> LicenseEntry {
        LicenseEntry::new(id(s), format!("text of {s}"))
    }

    #[test]
    fn empty_table() {
        let table = RemapTable::new();
        assert!(table.is_empty());
        assert!(table.target(&id("A")).is_none());
    }

    #[test]
    fn lookup_by_original_id() {
        let mut table = RemapTable::new();
        table.record(lic("B"), id("A"), RemapKind::Deduplicated);
        table.record(lic("C"), id("LicenseRef-7"), RemapKind::Renamed);

        assert_eq!(table.len(), 2);
        assert_eq!(table.target(&id("B")), Some(&id("A")));
        assert_eq!(table.target(&id("C")), Some(&id("LicenseRef-7")));
        assert_eq!(table.renamed().count(), 1);
        assert_eq!(table.deduplicated().count(), 1);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut table = RemapTable::new();
        table.record(lic("Z"), id("1"), RemapKind::Renamed);
        table.record(lic("A"), id("2"), RemapKind::Renamed);
        let order: Vec<_> = table.iter().map(|r| r.original_id().to_string()).collect();
        assert_eq!(order, vec!["Z", "A"]);
    }

    #[test]
    fn identity_detection() {
        let mut table = RemapTable::new();
        table.record(lic("A"), id("A"), RemapKind::Deduplicated);
        assert!(table.get(&id("A")).unwrap().is_identity());
    }

    #[test]
    fn id_map_for_rewriting() {
        let mut table = RemapTable::new();
        table.record(lic("B"), id("A"), RemapKind::Deduplicated);
        let map = table.to_id_map();
        assert_eq!(map.get("B").map(String::as_str), Some("A"));
    }

    #[test]
    fn serializes_rows() {
        let mut table = RemapTable::new();
        table.record(lic("B"), id("A"), RemapKind::Deduplicated);
        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value[0]["target"], "A");
        assert_eq!(value[0]["kind"], "deduplicated");
        assert_eq!(value[0]["original"]["id"], "B");
    }
}
