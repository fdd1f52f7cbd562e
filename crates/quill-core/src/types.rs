//! Core data types for the Quill document platform.
//!
//! A document carries its own access policy: one immutable owner, a public
//! flag, and a set of users the owner has shared it with. The sharing
//! membership is a true set type throughout — construction, mutation, and
//! serialization — so duplicate grants are unrepresentable rather than
//! filtered after the fact.
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a document.
///
/// Wraps a UUID v4, providing type safety to distinguish document IDs from
/// other UUID-based identifiers in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    /// Creates a new random DocumentId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a DocumentId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a user.
///
/// Identity resolution (login, token issuance) happens outside this system;
/// a UserId is the stable id the external auth layer hands us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a new random UserId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a UserId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Core Domain Types
// ============================================================================

/// A document with its access policy and ordering metadata.
///
/// Invariants:
/// - `owner` is set at creation and never transfers.
/// - `shared_with` never contains `owner`; owner access is implicit.
/// - `last_modified` never decreases across accepted mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque stable identifier.
    pub id: DocumentId,

    /// Document title, mutable by the owner only.
    pub title: String,

    /// Identity of the creator; immutable after creation.
    pub owner: UserId,

    /// Anyone may read (and therefore edit) when true.
    pub is_public: bool,

    /// Users granted read/write without being the owner.
    #[serde(default)]
    pub shared_with: BTreeSet<UserId>,

    /// Creation timestamp.
    pub created: DateTime<Utc>,

    /// Updated on every metadata mutation and on every committed content
    /// change reported by the sync engine.
    pub last_modified: DateTime<Utc>,
}

impl Document {
    /// Whether the given user is the owner.
    #[must_use]
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner == user
    }

    /// Whether the document has been shared with the given user.
    ///
    /// The owner is never a member of the sharing set.
    #[must_use]
    pub fn is_shared_with(&self, user: UserId) -> bool {
        self.shared_with.contains(&user)
    }
}

/// External identity record, consumed read-only.
///
/// Users are created and maintained by the external auth system; this core
/// only reads their display fields when listing sharing grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable user id.
    pub id: UserId,

    /// Display name, if the auth system recorded one.
    pub display_name: Option<String>,

    /// Email address, if known.
    pub email: Option<String>,

    /// Avatar/picture URL, if known.
    pub picture_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(owner: UserId) -> Document {
        Document {
            id: DocumentId::new(),
            title: "Plan".to_string(),
            owner,
            is_public: false,
            shared_with: BTreeSet::new(),
            created: Utc::now(),
            last_modified: Utc::now(),
        }
    }

    #[test]
    fn test_document_id_roundtrip() {
        let id = DocumentId::new();
        let parsed: DocumentId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_user_id_serde_transparent() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.0));
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_shared_with_is_a_set() {
        let owner = UserId::new();
        let guest = UserId::new();
        let mut d = doc(owner);

        d.shared_with.insert(guest);
        d.shared_with.insert(guest);
        assert_eq!(d.shared_with.len(), 1);
        assert!(d.is_shared_with(guest));
        assert!(!d.is_shared_with(owner));
    }

    #[test]
    fn test_shared_with_defaults_empty_when_absent() {
        let owner = UserId::new();
        let d = doc(owner);
        let mut value = serde_json::to_value(&d).unwrap();
        value.as_object_mut().unwrap().remove("shared_with");

        let back: Document = serde_json::from_value(value).unwrap();
        assert!(back.shared_with.is_empty());
    }

    #[test]
    fn test_ownership() {
        let owner = UserId::new();
        let d = doc(owner);
        assert!(d.is_owned_by(owner));
        assert!(!d.is_owned_by(UserId::new()));
    }
}
