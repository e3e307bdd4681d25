//! Sources of license catalogs.
//!
//! The merge engine reads each document's catalog exactly once through the
//! [`Document`] trait and works on the owned copy it gets back, so nothing a
//! document hands out can be changed by the merge.

use std::collections::BTreeMap;

use licmerge_types::{Catalog, CatalogEntry, DocumentId, LicenseEntry, LicenseId, NOASSERTION_ID};
use serde::Deserialize;
use serde_json::Value;

use crate::error::InputReadError;

/// A document owning a license catalog.
pub trait Document {
    /// Name used to key this document's remap table.
    fn id(&self) -> &DocumentId;

    /// Return an owned copy of the document's license catalog.
    fn license_catalog(&self) -> Result<Catalog, InputReadError>;
}

impl<D: Document + ?Sized> Document for &D {
    fn id(&self) -> &DocumentId {
        (**self).id()
    }

    fn license_catalog(&self) -> Result<Catalog, InputReadError> {
        (**self).license_catalog()
    }
}

impl<D: Document + ?Sized> Document for Box<D> {
    fn id(&self) -> &DocumentId {
        (**self).id()
    }

    fn license_catalog(&self) -> Result<Catalog, InputReadError> {
        (**self).license_catalog()
    }
}

/// A document whose catalog is already built in memory.
#[derive(Clone, Debug)]
pub struct InMemoryDocument {
    id: DocumentId,
    catalog: Catalog,
}

impl InMemoryDocument {
    pub fn new(id: impl Into<DocumentId>, catalog: Catalog) -> Self {
        Self {
            id: id.into(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Document for InMemoryDocument {
    fn id(&self) -> &DocumentId {
        &self.id
    }

    fn license_catalog(&self) -> Result<Catalog, InputReadError> {
        Ok(self.catalog.clone())
    }
}

/// A document backed by raw JSON, parsed each time the catalog is requested.
///
/// Expected shape:
///
/// ```json
/// {
///   "licenses": [
///     {"id": "LicenseRef-1", "text": "...", "metadata": {"name": "Foo"}},
///     {"id": "NOASSERTION"}
///   ]
/// }
/// ```
///
/// Unknown top-level fields are ignored.
#[derive(Clone, Debug)]
pub struct JsonDocument {
    id: DocumentId,
    source: String,
}

#[derive(Deserialize)]
struct WireDocument {
    #[serde(default)]
    licenses: Vec<WireLicense>,
}

#[derive(Deserialize)]
struct WireLicense {
    id: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    metadata: BTreeMap<String, Value>,
}

impl JsonDocument {
    pub fn new(id: impl Into<DocumentId>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
        }
    }
}

impl Document for JsonDocument {
    fn id(&self) -> &DocumentId {
        &self.id
    }

    fn license_catalog(&self) -> Result<Catalog, InputReadError> {
        let wire: WireDocument = serde_json::from_str(&self.source)
            .map_err(|e| InputReadError::Malformed(e.to_string()))?;

        let mut entries = Vec::with_capacity(wire.licenses.len());
        for license in wire.licenses {
            let entry = match license.text {
                None if license.id == NOASSERTION_ID => CatalogEntry::NoAssertion,
                None => {
                    return Err(InputReadError::Malformed(format!(
                        "license {} has no text",
                        license.id
                    )))
                }
                Some(text) => {
                    let id = LicenseId::new(license.id)?;
                    LicenseEntry::new(id, text)
                        .with_metadata(license.metadata)
                        .into()
                }
            };
            entries.push(entry);
        }
        Ok(Catalog::new(entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_returns_independent_copy() {
        let catalog = Catalog::from_licenses([LicenseEntry::new(
            LicenseId::new("LicenseRef-1").unwrap(),
            "text",
        )])
        .unwrap();
        let doc = InMemoryDocument::new("doc", catalog);

        let copy = doc.license_catalog().unwrap();
        let renamed: Vec<_> = copy
            .into_entries()
            .into_iter()
            .filter_map(|e| match e {
                CatalogEntry::Concrete(l) => Some(l.renamed(LicenseId::new("X").unwrap())),
                CatalogEntry::NoAssertion => None,
            })
            .collect();
        assert_eq!(renamed[0].id().as_str(), "X");
        assert_eq!(
            doc.catalog().licenses().next().unwrap().id().as_str(),
            "LicenseRef-1"
        );
    }

    #[test]
    fn json_document_parses_entries() {
        let doc = JsonDocument::new(
            "a.json",
            r#"{
                "spdxVersion": "SPDX-2.3",
                "licenses": [
                    {"id": "LicenseRef-1", "text": "one", "metadata": {"name": "One"}},
                    {"id": "NOASSERTION"}
                ]
            }"#,
        );
        let catalog = doc.license_catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        let first = catalog.licenses().next().unwrap();
        assert_eq!(first.name(), Some("One"));
        assert!(catalog.entries()[1].is_noassertion());
    }

    #[test]
    fn json_document_malformed() {
        let doc = JsonDocument::new("bad.json", "{ not json");
        assert!(matches!(
            doc.license_catalog(),
            Err(InputReadError::Malformed(_))
        ));
    }

    #[test]
    fn json_document_missing_text() {
        let doc = JsonDocument::new("bad.json", r#"{"licenses": [{"id": "LicenseRef-1"}]}"#);
        assert!(matches!(
            doc.license_catalog(),
            Err(InputReadError::Malformed(_))
        ));
    }

    #[test]
    fn json_document_duplicate_ids() {
        let doc = JsonDocument::new(
            "dup.json",
            r#"{"licenses": [{"id": "A", "text": "x"}, {"id": "A", "text": "y"}]}"#,
        );
        assert!(matches!(
            doc.license_catalog(),
            Err(InputReadError::Catalog(_))
        ));
    }

    #[test]
    fn json_document_without_licenses_is_empty() {
        let doc = JsonDocument::new("empty.json", "{}");
        assert!(doc.license_catalog().unwrap().is_empty());
    }
}
