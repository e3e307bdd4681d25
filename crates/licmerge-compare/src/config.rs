use serde::{Deserialize, Serialize};

use crate::normalize::{ExactText, NormalizedText, DEFAULT_MAX_TEXT_LEN};
use crate::traits::EquivalencePredicate;

/// Which built-in predicate to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquivalenceMode {
    Exact,
    #[default]
    Normalized,
}

/// Settings for license text comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquivalenceConfig {
    pub mode: EquivalenceMode,
    /// Treat `http://` and `https://` URLs as equal (normalized mode only).
    pub ignore_url_scheme: bool,
    /// Largest text, in bytes, accepted for comparison (normalized mode only).
    pub max_text_len: usize,
}

impl Default for EquivalenceConfig {
    fn default() -> Self {
        Self {
            mode: EquivalenceMode::Normalized,
            ignore_url_scheme: true,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }
}

impl EquivalenceConfig {
    pub fn build(&self) -> Box<dyn EquivalencePredicate> {
        match self.mode {
            EquivalenceMode::Exact => Box::new(ExactText),
            EquivalenceMode::Normalized => Box::new(
                NormalizedText::new()
                    .ignore_url_scheme(self.ignore_url_scheme)
                    .max_text_len(self.max_text_len),
            ),
        }
    }
}
