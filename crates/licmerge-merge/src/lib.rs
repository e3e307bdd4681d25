//! Merge engine for licmerge.
//!
//! Folds the non-standard license catalogs of several documents into one
//! consolidated catalog. The first document is the master: its entries seed
//! the result unchanged. Every later document contributes only the licenses
//! whose text is not already present, each under a fresh identifier, and
//! receives a [`RemapTable`] recording where each of its original
//! identifiers now points.
//!
//! ```ignore
//! use licmerge_compare::NormalizedText;
//! use licmerge_merge::{CatalogMerger, Document, InMemoryDocument};
//! use licmerge_refs::SequentialAllocator;
//!
//! let mut alloc = SequentialAllocator::new().starting_after(master.catalog());
//! let docs = [master, child];
//! let outcome = CatalogMerger::new(NormalizedText::new()).merge(&docs, &mut alloc)?;
//! let table = outcome.remap_for(docs[1].id()).unwrap();
//! ```
//!
//! # Modules
//!
//! - [`document`] - The [`Document`] trait and its in-memory and JSON implementations
//! - [`catalog`] - [`MergedCatalog`], the append-only consolidated catalog
//! - [`remap`] - [`RemapTable`], the per-document identifier mapping
//! - [`merger`] - [`CatalogMerger`] and [`MergeOutcome`]
//! - [`config`] - [`MergeConfig`], loadable from TOML
//! - [`error`] - Error types

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod merger;
pub mod remap;

pub use catalog::MergedCatalog;
pub use config::{MergeConfig, ReadErrorPolicy};
pub use document::{Document, InMemoryDocument, JsonDocument};
pub use error::{ConfigError, InputReadError, MergeError, MergeResult};
pub use merger::{CatalogMerger, MergeOutcome, MergeStats, SkippedDocument};
pub use remap::{DocumentRemap, Remap, RemapKind, RemapTable};
