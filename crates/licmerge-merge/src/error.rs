//! Error types for the merge crate.

use licmerge_compare::EquivalenceError;
use licmerge_refs::AllocationError;
use licmerge_types::{DocumentId, LicenseId, TypeError};

/// A document's license catalog could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum InputReadError {
    /// The document source could not be parsed.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// The parsed entries do not form a valid catalog.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] TypeError),

    /// The catalog is not available at all.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Errors that abort a merge.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// `merge` was called with an empty document list.
    #[error("no documents to merge")]
    NoDocuments,

    /// A document's catalog could not be read.
    #[error("failed to read license catalog of {document}: {source}")]
    InputRead {
        document: DocumentId,
        #[source]
        source: InputReadError,
    },

    /// The identifier allocator failed or produced a colliding value.
    #[error("identifier allocation failed: {0}")]
    Allocation(#[from] AllocationError),

    /// The equivalence predicate failed while evaluating an entry.
    #[error("equivalence check failed for {license} of {document}: {source}")]
    Equivalence {
        document: DocumentId,
        license: LicenseId,
        #[source]
        source: EquivalenceError,
    },
}

/// Errors loading a [`MergeConfig`](crate::MergeConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid merge configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid allocator configuration: {0}")]
    Allocator(#[from] AllocationError),
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
