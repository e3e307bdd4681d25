//! License text equivalence for licmerge.
//!
//! The merge engine decides whether two license definitions are "the same"
//! through the [`EquivalencePredicate`] trait and never inspects texts
//! itself. This crate provides that seam plus two predicates and a
//! line-level diff used to explain why two texts were kept apart.
//!
//! # Key Types
//!
//! - [`EquivalencePredicate`] -- Pure, fallible text comparison
//! - [`ExactText`] -- Byte-for-byte equality
//! - [`NormalizedText`] -- Equality after case, whitespace, and punctuation normalization
//! - [`EquivalenceConfig`] -- serde-loadable choice of predicate
//! - [`LicenseDiff`] / [`DiffHunk`] / [`DiffLine`] -- Line-level mismatch report

pub mod config;
pub mod error;
pub mod explain;
pub mod normalize;
pub mod traits;

pub use config::{EquivalenceConfig, EquivalenceMode};
pub use error::{EquivalenceError, Result};
pub use explain::{diff_license_texts, DiffHunk, DiffLine, LicenseDiff};
pub use normalize::{ExactText, NormalizedText, DEFAULT_MAX_TEXT_LEN};
pub use traits::EquivalencePredicate;
