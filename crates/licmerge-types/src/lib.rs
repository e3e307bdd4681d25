//! Foundation types for licmerge.
//!
//! This crate provides the license data model shared by every other licmerge
//! crate: the identifiers, the text-bearing license entries, and the ordered
//! per-document catalogs that the merge engine consumes.
//!
//! # Key Types
//!
//! - [`LicenseId`] - Validated license identifier, unique within one catalog
//! - [`LicenseEntry`] - A non-standard license definition: identifier, text, opaque metadata
//! - [`CatalogEntry`] - Either a concrete [`LicenseEntry`] or the fixed `NOASSERTION` placeholder
//! - [`Catalog`] - Ordered entries owned by one document, identifiers pairwise distinct
//! - [`DocumentId`] - Name of the document that owns a catalog
//! - [`TextDigest`] - BLAKE3 fingerprint of a license text, for audit output

pub mod catalog;
pub mod document;
pub mod error;
pub mod license;

pub use catalog::Catalog;
pub use document::DocumentId;
pub use error::TypeError;
pub use license::{CatalogEntry, LicenseEntry, LicenseId, TextDigest, NOASSERTION_ID};
