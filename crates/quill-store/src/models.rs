//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. They are separate from the domain types in quill-core: the
//! sharing set is stored as a UUID array and becomes a `BTreeSet` on the
//! way out, deduplicating on read even though the mutation statements
//! already keep membership unique.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use quill_core::{Document, DocumentId, UserId, UserProfile};

/// Database row for the `documents` table.
#[derive(Debug, Clone, FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub title: String,
    pub owner_id: Uuid,
    pub is_public: bool,
    pub shared_with: Vec<Uuid>,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document {
            id: DocumentId::from_uuid(row.id),
            title: row.title,
            owner: UserId::from_uuid(row.owner_id),
            is_public: row.is_public,
            shared_with: row.shared_with.into_iter().map(UserId::from_uuid).collect(),
            created: row.created,
            last_modified: row.last_modified,
        }
    }
}

/// Database row for the `users` table (consumed, never written here).
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub picture_url: Option<String>,
    pub created: DateTime<Utc>,
}

impl From<UserRow> for UserProfile {
    fn from(row: UserRow) -> Self {
        UserProfile {
            id: UserId::from_uuid(row.id),
            display_name: row.display_name,
            email: row.email,
            picture_url: row.picture_url,
        }
    }
}

/// Input for creating a new document.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub id: Uuid,
    pub title: String,
    pub owner_id: Uuid,
    pub is_public: bool,
}

impl NewDocument {
    /// Create a new private document with a fresh id.
    pub fn new(title: String, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            owner_id,
            is_public: false,
        }
    }

    /// Set the initial visibility.
    pub fn with_visibility(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_defaults_private() {
        let doc = NewDocument::new("Plan".to_string(), Uuid::new_v4());
        assert!(!doc.is_public);
    }

    #[test]
    fn test_new_document_with_visibility() {
        let doc = NewDocument::new("Plan".to_string(), Uuid::new_v4()).with_visibility(true);
        assert!(doc.is_public);
    }

    #[test]
    fn test_row_conversion_dedups_shared_with() {
        let guest = Uuid::new_v4();
        let row = DocumentRow {
            id: Uuid::new_v4(),
            title: "Plan".to_string(),
            owner_id: Uuid::new_v4(),
            is_public: false,
            shared_with: vec![guest, guest],
            created: Utc::now(),
            last_modified: Utc::now(),
        };

        let doc: Document = row.into();
        assert_eq!(doc.shared_with.len(), 1);
        assert!(doc.shared_with.contains(&UserId::from_uuid(guest)));
    }

    #[test]
    fn test_user_row_conversion() {
        let id = Uuid::new_v4();
        let row = UserRow {
            id,
            display_name: Some("Ada".to_string()),
            email: None,
            picture_url: None,
            created: Utc::now(),
        };

        let profile: UserProfile = row.into();
        assert_eq!(profile.id, UserId::from_uuid(id));
        assert_eq!(profile.display_name.as_deref(), Some("Ada"));
    }
}
