//! The [`IdentifierAllocator`] trait.

use licmerge_types::LicenseId;

use crate::error::Result;

/// Source of fresh license identifiers for a consolidated catalog.
///
/// Each successful call must return a value never returned before by the same
/// allocator. Implementations are stateful; callers that share one allocator
/// across merges must serialize those merges themselves.
pub trait IdentifierAllocator {
    /// Issue the next identifier.
    fn next_identifier(&mut self) -> Result<LicenseId>;

    /// Number of identifiers issued so far.
    fn issued(&self) -> u64;
}

impl<A: IdentifierAllocator + ?Sized> IdentifierAllocator for &mut A {
    fn next_identifier(&mut self) -> Result<LicenseId> {
        (**self).next_identifier()
    }

    fn issued(&self) -> u64 {
        (**self).issued()
    }
}

impl<A: IdentifierAllocator + ?Sized> IdentifierAllocator for Box<A> {
    fn next_identifier(&mut self) -> Result<LicenseId> {
        (**self).next_identifier()
    }

    fn issued(&self) -> u64 {
        (**self).issued()
    }
}
