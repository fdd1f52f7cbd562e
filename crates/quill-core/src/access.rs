//! Access-control decisions for documents.
//!
//! `authorize` is the single decision point every read, write, share, and
//! sync operation goes through. It is a pure predicate over the document's
//! access policy and the acting identity: no I/O, no caching — visibility
//! and sharing can change between calls, so every call evaluates fresh.
//!
//! Unauthenticated callers never reach this table; the transport layer
//! rejects them first. The one identity-free surface, the public share
//! link, uses the narrower [`public_read`] check.

use serde::{Deserialize, Serialize};

use crate::types::{Document, UserId};

/// What an actor is trying to do to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// View the document and receive sync snapshots/steps.
    Read,
    /// Submit edits through the sync engine. Same tier as Read in this
    /// system: there is no separate viewer-only grant.
    Write,
    /// Change the document title.
    Rename,
    /// Grant or revoke sharing, or list the sharing set.
    ManageSharing,
    /// Toggle the public flag.
    ManageVisibility,
    /// Hard-delete the document.
    Delete,
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    /// Whether this decision permits the operation.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decide whether `actor` may exercise `capability` on `document`.
///
/// Decision table, first matching rule wins:
///
/// - `Read` / `Write`: Allow if the actor owns the document, the document
///   is public, or the actor is in the sharing set.
/// - `Rename` / `ManageSharing` / `ManageVisibility` / `Delete`: Allow
///   only for the owner.
#[must_use]
pub fn authorize(document: &Document, actor: UserId, capability: Capability) -> Decision {
    let allowed = match capability {
        Capability::Read | Capability::Write => {
            document.is_owned_by(actor) || document.is_public || document.is_shared_with(actor)
        }
        Capability::Rename
        | Capability::ManageSharing
        | Capability::ManageVisibility
        | Capability::Delete => document.is_owned_by(actor),
    };

    if allowed { Decision::Allow } else { Decision::Deny }
}

/// The public share-link check: Allow iff the document is public.
///
/// Identity is not consulted at all. Callers must report a Deny exactly
/// like a missing document so private documents never leak existence.
#[must_use]
pub fn public_read(document: &Document) -> Decision {
    if document.is_public {
        Decision::Allow
    } else {
        Decision::Deny
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentId;
    use chrono::Utc;
    use std::collections::BTreeSet;

    fn document(owner: UserId, is_public: bool, shared: &[UserId]) -> Document {
        Document {
            id: DocumentId::new(),
            title: "Plan".to_string(),
            owner,
            is_public,
            shared_with: shared.iter().copied().collect::<BTreeSet<_>>(),
            created: Utc::now(),
            last_modified: Utc::now(),
        }
    }

    const ALL_CAPABILITIES: [Capability; 6] = [
        Capability::Read,
        Capability::Write,
        Capability::Rename,
        Capability::ManageSharing,
        Capability::ManageVisibility,
        Capability::Delete,
    ];

    #[test]
    fn test_owner_allowed_everything() {
        let owner = UserId::new();
        let doc = document(owner, false, &[]);

        for capability in ALL_CAPABILITIES {
            assert_eq!(authorize(&doc, owner, capability), Decision::Allow);
        }
    }

    #[test]
    fn test_stranger_denied_everything_on_private_document() {
        let doc = document(UserId::new(), false, &[]);
        let stranger = UserId::new();

        for capability in ALL_CAPABILITIES {
            assert_eq!(authorize(&doc, stranger, capability), Decision::Deny);
        }
    }

    #[test]
    fn test_read_iff_owner_or_public_or_shared() {
        let owner = UserId::new();
        let guest = UserId::new();
        let stranger = UserId::new();

        let private = document(owner, false, &[guest]);
        assert_eq!(authorize(&private, owner, Capability::Read), Decision::Allow);
        assert_eq!(authorize(&private, guest, Capability::Read), Decision::Allow);
        assert_eq!(
            authorize(&private, stranger, Capability::Read),
            Decision::Deny
        );

        let public = document(owner, true, &[]);
        assert_eq!(
            authorize(&public, stranger, Capability::Read),
            Decision::Allow
        );
    }

    #[test]
    fn test_write_matches_read_tier() {
        let owner = UserId::new();
        let guest = UserId::new();
        let stranger = UserId::new();
        let doc = document(owner, false, &[guest]);

        for actor in [owner, guest, stranger] {
            assert_eq!(
                authorize(&doc, actor, Capability::Write),
                authorize(&doc, actor, Capability::Read)
            );
        }
    }

    #[test]
    fn test_shared_user_cannot_manage() {
        let owner = UserId::new();
        let guest = UserId::new();
        let doc = document(owner, false, &[guest]);

        for capability in [
            Capability::Rename,
            Capability::ManageSharing,
            Capability::ManageVisibility,
            Capability::Delete,
        ] {
            assert_eq!(authorize(&doc, guest, capability), Decision::Deny);
        }
    }

    #[test]
    fn test_public_does_not_grant_management() {
        let doc = document(UserId::new(), true, &[]);
        let stranger = UserId::new();

        assert_eq!(
            authorize(&doc, stranger, Capability::ManageVisibility),
            Decision::Deny
        );
        assert_eq!(
            authorize(&doc, stranger, Capability::Delete),
            Decision::Deny
        );
    }

    #[test]
    fn test_public_read_ignores_identity() {
        let owner = UserId::new();
        assert_eq!(public_read(&document(owner, true, &[])), Decision::Allow);
        assert_eq!(public_read(&document(owner, false, &[])), Decision::Deny);
    }

    #[test]
    fn test_decision_is_allowed() {
        assert!(Decision::Allow.is_allowed());
        assert!(!Decision::Deny.is_allowed());
    }
}
