use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeError;

/// Fixed identifier of the "no assertion" placeholder entry.
pub const NOASSERTION_ID: &str = "NOASSERTION";

/// Identifier of a license entry.
///
/// Identifiers are non-empty and contain no whitespace. Uniqueness is a
/// property of the owning [`Catalog`](crate::Catalog), not of the identifier
/// itself.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LicenseId(String);

impl LicenseId {
    /// Parse and validate an identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        if id.is_empty() {
            return Err(TypeError::InvalidIdentifier {
                id,
                reason: "identifier must not be empty".into(),
            });
        }
        let forbidden = id.chars().find(|c| c.is_whitespace() || c.is_control());
        if let Some(ch) = forbidden {
            return Err(TypeError::InvalidIdentifier {
                reason: format!("contains forbidden character: {ch:?}"),
                id,
            });
        }
        Ok(Self(id))
    }

    /// The identifier of the `NOASSERTION` placeholder.
    pub fn noassertion() -> Self {
        Self(NOASSERTION_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the reserved `NOASSERTION` identifier.
    pub fn is_noassertion(&self) -> bool {
        self.0 == NOASSERTION_ID
    }
}

impl fmt::Debug for LicenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LicenseId({})", self.0)
    }
}

impl fmt::Display for LicenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LicenseId {
    type Error = TypeError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl TryFrom<&str> for LicenseId {
    type Error = TypeError;

    fn try_from(id: &str) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<LicenseId> for String {
    fn from(id: LicenseId) -> Self {
        id.0
    }
}

/// BLAKE3 fingerprint of a license text.
///
/// Only used to label entries in audit output. Deduplication never relies on
/// it, because equivalent texts need not be byte-identical.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextDigest([u8; 32]);

impl TextDigest {
    pub fn of(text: &str) -> Self {
        Self(*blake3::hash(text.as_bytes()).as_bytes())
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Debug for TextDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextDigest({})", self.short_hex())
    }
}

impl fmt::Display for TextDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A non-standard license definition local to one document.
///
/// Entries are plain owned values. Cloning one yields a fully independent
/// copy, and the only way to change an identifier is [`renamed`](Self::renamed),
/// which consumes the entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseEntry {
    id: LicenseId,
    text: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, Value>,
}

impl LicenseEntry {
    pub fn new(id: LicenseId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Attach opaque metadata (name, cross references, comments, ...).
    pub fn with_metadata(mut self, metadata: BTreeMap<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn id(&self) -> &LicenseId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }

    /// The human-readable license name, if the metadata carries one.
    pub fn name(&self) -> Option<&str> {
        self.metadata.get("name").and_then(Value::as_str)
    }

    pub fn digest(&self) -> TextDigest {
        TextDigest::of(&self.text)
    }

    /// Consume the entry and return it under a new identifier.
    ///
    /// Text and metadata carry over unchanged.
    pub fn renamed(self, id: LicenseId) -> Self {
        Self { id, ..self }
    }
}

/// One slot of a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    /// A concrete license definition with text.
    Concrete(LicenseEntry),
    /// The fixed "no assertion" placeholder. It has no text and is never
    /// renamed.
    NoAssertion,
}

impl CatalogEntry {
    /// The identifier of this slot. `NoAssertion` always reports
    /// [`NOASSERTION_ID`].
    pub fn id(&self) -> LicenseId {
        match self {
            CatalogEntry::Concrete(entry) => entry.id().clone(),
            CatalogEntry::NoAssertion => LicenseId::noassertion(),
        }
    }

    /// Returns `true` if `id` names this slot.
    pub fn has_id(&self, id: &LicenseId) -> bool {
        match self {
            CatalogEntry::Concrete(entry) => entry.id() == id,
            CatalogEntry::NoAssertion => id.is_noassertion(),
        }
    }

    pub fn as_concrete(&self) -> Option<&LicenseEntry> {
        match self {
            CatalogEntry::Concrete(entry) => Some(entry),
            CatalogEntry::NoAssertion => None,
        }
    }

    pub fn is_noassertion(&self) -> bool {
        matches!(self, CatalogEntry::NoAssertion)
    }
}

impl From<LicenseEntry> for CatalogEntry {
    fn from(entry: LicenseEntry) -> Self {
        CatalogEntry::Concrete(entry)
    }
}
