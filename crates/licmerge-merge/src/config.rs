use licmerge_compare::EquivalenceConfig;
use licmerge_refs::{AllocatorConfig, SequentialAllocator};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What to do when a secondary document's catalog cannot be read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadErrorPolicy {
    /// Fail the whole merge.
    #[default]
    Abort,
    /// Leave the document out, keep everything merged so far, and report it
    /// in [`MergeOutcome::skipped`](crate::MergeOutcome::skipped).
    Skip,
}

/// Configuration for a merge run.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    pub on_read_error: ReadErrorPolicy,
    pub allocator: AllocatorConfig,
    pub equivalence: EquivalenceConfig,
}

impl MergeConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: MergeConfig = toml::from_str(source)?;
        SequentialAllocator::with_prefix(config.allocator.prefix.clone())?;
        Ok(config)
    }
}
