use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid license identifier {id:?}: {reason}")]
    InvalidIdentifier { id: String, reason: String },

    #[error("duplicate license identifier in catalog: {0}")]
    DuplicateIdentifier(String),
}
