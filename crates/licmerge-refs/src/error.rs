//! Error types for identifier allocation.

use thiserror::Error;

/// Errors that can occur while issuing license identifiers.
///
/// Every variant is fatal to a merge in progress: once the identifier space
/// is in doubt no further entries can be added safely.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    /// The allocator has no identifiers left to issue.
    #[error("identifier allocator exhausted after {issued} identifiers")]
    Exhausted { issued: u64 },

    /// The allocator returned a value already present in the target namespace.
    #[error("allocated identifier collides with an existing entry: {id}")]
    Collision { id: String },

    /// The allocator produced, or was configured to produce, a malformed identifier.
    #[error("invalid license reference: {id}: {reason}")]
    InvalidIdentifier { id: String, reason: String },

    /// An allocator backend failed for another reason.
    #[error("identifier allocator failed: {0}")]
    Backend(String),
}

/// Convenience type alias for allocation operations.
pub type Result<T> = std::result::Result<T, AllocationError>;
