//! License reference allocation for licmerge.
//!
//! Every license entry that a secondary document contributes to a merged
//! catalog receives a fresh identifier from an allocator owned by the caller
//! of the merge. This crate defines that seam and ships the sequential
//! `LicenseRef-<n>` allocator used by the CLI.
//!
//! # Architecture
//!
//! - The allocator is passed into a merge as `&mut dyn IdentifierAllocator`.
//!   Exclusive borrowing makes the merge the sole mutator of the counter for
//!   the duration of the call.
//! - Allocators only promise freshness relative to what they have issued.
//!   The merge engine still checks each value against the consolidated
//!   catalog and reports a collision as [`AllocationError::Collision`].
//!
//! # Modules
//!
//! - [`error`] - Error types for allocation
//! - [`traits`] - The [`IdentifierAllocator`] trait
//! - [`names`] - `LicenseRef-` name validation
//! - [`sequential`] - [`SequentialAllocator`], a counting allocator
//! - [`config`] - [`AllocatorConfig`], the serde-loadable allocator settings

pub mod config;
pub mod error;
pub mod names;
pub mod sequential;
pub mod traits;

pub use config::AllocatorConfig;
pub use error::{AllocationError, Result};
pub use names::{is_license_ref, validate_license_ref, LICENSE_REF_PREFIX};
pub use sequential::SequentialAllocator;
pub use traits::IdentifierAllocator;
