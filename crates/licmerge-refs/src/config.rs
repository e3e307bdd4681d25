use licmerge_types::Catalog;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::names::LICENSE_REF_PREFIX;
use crate::sequential::SequentialAllocator;

/// Settings for the allocator that names newly merged entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    /// Prefix of every issued identifier.
    pub prefix: String,
    /// Maximum number of identifiers one merge may allocate.
    pub limit: Option<u64>,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            prefix: LICENSE_REF_PREFIX.to_string(),
            limit: None,
        }
    }
}

impl AllocatorConfig {
    /// Build an allocator positioned after the identifiers already used by
    /// the master catalog.
    pub fn build(&self, master: &Catalog) -> Result<SequentialAllocator> {
        let mut alloc = SequentialAllocator::with_prefix(self.prefix.clone())?.starting_after(master);
        if let Some(limit) = self.limit {
            alloc = alloc.with_limit(limit);
        }
        Ok(alloc)
    }
}
