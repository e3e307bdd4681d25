//! The catalog merge algorithm.
//!
//! The master's entries seed the consolidated catalog under their original
//! identifiers. Each secondary document is then folded in, in input order:
//! an entry whose text is equivalent to any entry already consolidated maps
//! onto that entry; an entry matching none of them is appended under a fresh
//! identifier. Entries appended this way are matched against by every later
//! entry, including later entries of the same document, so the same new
//! text contributed twice collapses to one consolidated entry.

use licmerge_compare::EquivalencePredicate;
use licmerge_refs::{AllocationError, IdentifierAllocator};
use licmerge_types::{Catalog, CatalogEntry, DocumentId, LicenseEntry, LicenseId};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::MergedCatalog;
use crate::config::{MergeConfig, ReadErrorPolicy};
use crate::document::Document;
use crate::error::{MergeError, MergeResult};
use crate::remap::{DocumentRemap, RemapKind, RemapTable};

/// Counters describing one merge run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    /// Documents whose catalog was merged, master included.
    pub documents: usize,
    /// Entries taken over from the master.
    pub seeded: usize,
    /// Secondary entries mapped onto an existing entry.
    pub deduplicated: usize,
    /// Secondary entries appended under a fresh identifier.
    pub renamed: usize,
    /// Predicate evaluations performed.
    pub comparisons: u64,
}

/// A secondary document left out under [`ReadErrorPolicy::Skip`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedDocument {
    pub document: DocumentId,
    pub reason: String,
}

/// Everything a merge produces.
#[derive(Clone, Debug, Serialize)]
pub struct MergeOutcome {
    /// The consolidated catalog.
    pub catalog: MergedCatalog,
    /// One table per processed secondary document, in input order.
    pub remaps: Vec<DocumentRemap>,
    /// Secondary documents that could not be read and were skipped.
    pub skipped: Vec<SkippedDocument>,
    pub stats: MergeStats,
}

impl MergeOutcome {
    /// The remap table produced for `document`, if it was processed as a
    /// secondary document.
    pub fn remap_for(&self, document: &DocumentId) -> Option<&RemapTable> {
        self.remaps
            .iter()
            .find(|r| &r.document == document)
            .map(|r| &r.table)
    }
}

/// Merges the license catalogs of a batch of documents.
pub struct CatalogMerger<P> {
    predicate: P,
    config: MergeConfig,
}

impl<P: EquivalencePredicate> CatalogMerger<P> {
    /// Create a merger with the default configuration.
    pub fn new(predicate: P) -> Self {
        Self::with_config(predicate, MergeConfig::default())
    }

    pub fn with_config(predicate: P, config: MergeConfig) -> Self {
        Self { predicate, config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merge `documents`, the first of which is the master.
    ///
    /// `allocator` names every entry a secondary document contributes. It is
    /// borrowed exclusively for the whole call; callers that reuse it across
    /// merges get identifiers that stay unique across those merges.
    pub fn merge<D: Document>(
        &self,
        documents: &[D],
        allocator: &mut dyn IdentifierAllocator,
    ) -> MergeResult<MergeOutcome> {
        let (master, secondaries) = documents.split_first().ok_or(MergeError::NoDocuments)?;

        let master_catalog = master
            .license_catalog()
            .map_err(|source| MergeError::InputRead {
                document: master.id().clone(),
                source,
            })?;

        let mut stats = MergeStats {
            documents: 1,
            seeded: master_catalog.len(),
            ..MergeStats::default()
        };
        let mut catalog = MergedCatalog::seed(master_catalog);
        info!(
            master = %master.id(),
            seeded = stats.seeded,
            secondaries = secondaries.len(),
            "license catalog merge started"
        );

        let mut remaps = Vec::with_capacity(secondaries.len());
        let mut skipped = Vec::new();

        for document in secondaries {
            let source = match document.license_catalog() {
                Ok(source) => source,
                Err(err) => match self.config.on_read_error {
                    ReadErrorPolicy::Abort => {
                        return Err(MergeError::InputRead {
                            document: document.id().clone(),
                            source: err,
                        })
                    }
                    ReadErrorPolicy::Skip => {
                        warn!(document = %document.id(), error = %err, "skipping unreadable document");
                        skipped.push(SkippedDocument {
                            document: document.id().clone(),
                            reason: err.to_string(),
                        });
                        continue;
                    }
                },
            };

            let table = self.fold(document.id(), source, &mut catalog, allocator, &mut stats)?;
            info!(
                document = %document.id(),
                renamed = table.renamed().count(),
                deduplicated = table.deduplicated().count(),
                "document merged"
            );
            stats.documents += 1;
            remaps.push(DocumentRemap {
                document: document.id().clone(),
                table,
            });
        }

        info!(
            entries = catalog.len(),
            documents = stats.documents,
            renamed = stats.renamed,
            deduplicated = stats.deduplicated,
            skipped = skipped.len(),
            "license catalog merge finished"
        );

        Ok(MergeOutcome {
            catalog,
            remaps,
            skipped,
            stats,
        })
    }

    /// Fold one secondary catalog into `catalog` and return its remap table.
    fn fold(
        &self,
        document: &DocumentId,
        source: Catalog,
        catalog: &mut MergedCatalog,
        allocator: &mut dyn IdentifierAllocator,
        stats: &mut MergeStats,
    ) -> MergeResult<RemapTable> {
        let mut table = RemapTable::new();

        for entry in source.into_entries() {
            let license = match entry {
                CatalogEntry::Concrete(license) => license,
                CatalogEntry::NoAssertion => {
                    if !catalog.has_noassertion() {
                        catalog.append(CatalogEntry::NoAssertion)?;
                    }
                    continue;
                }
            };

            if let Some(target) = self.find_equivalent(document, &license, catalog, stats)? {
                debug!(
                    document = %document,
                    license = %license.id(),
                    target = %target,
                    "license text already present"
                );
                stats.deduplicated += 1;
                table.record(license, target, RemapKind::Deduplicated);
                continue;
            }

            let fresh = allocator.next_identifier()?;
            if fresh.is_noassertion() || catalog.contains_id(&fresh) {
                return Err(AllocationError::Collision {
                    id: fresh.to_string(),
                }
                .into());
            }
            debug!(
                document = %document,
                license = %license.id(),
                renamed = %fresh,
                "license appended"
            );
            catalog.append(license.clone().renamed(fresh.clone()).into())?;
            stats.renamed += 1;
            table.record(license, fresh, RemapKind::Renamed);
        }

        Ok(table)
    }

    /// First consolidated entry whose text is equivalent to `license`'s.
    fn find_equivalent(
        &self,
        document: &DocumentId,
        license: &LicenseEntry,
        catalog: &MergedCatalog,
        stats: &mut MergeStats,
    ) -> MergeResult<Option<LicenseId>> {
        for existing in catalog.licenses() {
            stats.comparisons += 1;
            let equivalent = self
                .predicate
                .is_equivalent(existing.text(), license.text())
                .map_err(|source| MergeError::Equivalence {
                    document: document.clone(),
                    license: license.id().clone(),
                    source,
                })?;
            if equivalent {
                return Ok(Some(existing.id().clone()));
            }
        }
        Ok(None)
    }
}
