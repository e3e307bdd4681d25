//! Error types for the compare crate.

/// Errors that can occur while comparing license texts.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EquivalenceError {
    /// A text exceeded the configured comparison limit.
    #[error("license text too large to compare: {len} bytes (limit {limit})")]
    TextTooLarge { len: usize, limit: usize },

    /// The predicate could not reach a decision.
    #[error("equivalence check failed: {0}")]
    Failed(String),
}

/// Convenience alias for comparison results.
pub type Result<T> = std::result::Result<T, EquivalenceError>;
