//! Counting allocator issuing `<prefix><n>` identifiers.
//!
//! [`SequentialAllocator`] mirrors how SPDX tooling hands out the "next"
//! license reference of a document: it continues numbering after the highest
//! numeric suffix already used by the master catalog.

use licmerge_types::{Catalog, LicenseId};
use tracing::debug;

use crate::error::{AllocationError, Result};
use crate::names::{validate_license_ref, LICENSE_REF_PREFIX};
use crate::traits::IdentifierAllocator;

/// An allocator issuing `<prefix><n>` with strictly increasing `n`.
#[derive(Clone, Debug)]
pub struct SequentialAllocator {
    prefix: String,
    next: u64,
    limit: Option<u64>,
    issued: u64,
}

impl SequentialAllocator {
    /// Create an allocator with the default `LicenseRef-` prefix, starting at 1.
    pub fn new() -> Self {
        Self {
            prefix: LICENSE_REF_PREFIX.to_string(),
            next: 1,
            limit: None,
            issued: 0,
        }
    }

    /// Create an allocator with a custom prefix.
    ///
    /// The prefix must itself form a valid license reference once a number is
    /// appended, e.g. `LicenseRef-merged-`.
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        validate_license_ref(&format!("{prefix}0"))?;
        Ok(Self {
            prefix,
            ..Self::new()
        })
    }

    /// Continue numbering after the highest `<prefix><n>` found in `catalog`.
    pub fn starting_after(mut self, catalog: &Catalog) -> Self {
        let highest = catalog
            .iter()
            .filter_map(|entry| {
                let id = entry.id();
                id.as_str()
                    .strip_prefix(self.prefix.as_str())
                    .and_then(|n| n.parse::<u64>().ok())
            })
            .max();
        if let Some(n) = highest {
            self.next = self.next.max(n.saturating_add(1));
        }
        debug!(prefix = %self.prefix, next = self.next, "sequential allocator positioned");
        self
    }

    /// Start numbering at `next`.
    pub fn starting_at(mut self, next: u64) -> Self {
        self.next = next;
        self
    }

    /// Stop issuing identifiers after `limit` successful calls.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The number the next identifier will carry.
    pub fn peek_next(&self) -> u64 {
        self.next
    }
}

impl Default for SequentialAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierAllocator for SequentialAllocator {
    fn next_identifier(&mut self) -> Result<LicenseId> {
        if self.limit.is_some_and(|limit| self.issued >= limit) {
            return Err(AllocationError::Exhausted {
                issued: self.issued,
            });
        }
        let n = self.next;
        self.next = n.checked_add(1).ok_or(AllocationError::Exhausted {
            issued: self.issued,
        })?;

        let raw = format!("{}{n}", self.prefix);
        let id = LicenseId::new(raw.clone()).map_err(|e| AllocationError::InvalidIdentifier {
            id: raw,
            reason: e.to_string(),
        })?;
        self.issued += 1;
        Ok(id)
    }

    fn issued(&self) -> u64 {
        self.issued
    }
}
