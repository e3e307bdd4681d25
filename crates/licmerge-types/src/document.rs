use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a document taking part in a merge.
///
/// Remap tables are keyed by `DocumentId`, so callers should give every
/// document in one merge a distinct name (typically its namespace URI or the
/// path it was loaded from).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for DocumentId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
