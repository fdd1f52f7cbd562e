//! Public share-link routes.
//!
//! - GET /public/documents/{id} - Fetch a document with no identity at all
//!
//! This surface exposes only documents whose public flag is set. Any other
//! outcome, a private document, a shared-but-not-public document, or an id
//! that never existed, is the same "not available" response, so the surface
//! leaks nothing about what exists.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::{Document, DocumentId, UserId, public_read};
use quill_store::StoreError;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// An anonymously-readable document. No sharing set, no owner-facing
/// metadata beyond the owner id itself.
#[derive(Debug, Serialize, Deserialize)]
pub struct PublicDocumentResponse {
    /// Document ID.
    pub id: DocumentId,
    /// Document title.
    pub title: String,
    /// Owner user id.
    pub owner: UserId,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last modification.
    pub last_modified: DateTime<Utc>,
}

impl From<Document> for PublicDocumentResponse {
    fn from(document: Document) -> Self {
        Self {
            id: document.id,
            title: document.title,
            owner: document.owner,
            created: document.created,
            last_modified: document.last_modified,
        }
    }
}

/// GET /public/documents/{id} - Anonymous fetch of a public document.
async fn get_public_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<PublicDocumentResponse>> {
    let document: Document = state
        .store()
        .get_document(id)
        .await
        .map_err(|e| match e {
            StoreError::DocumentNotFound(id) => ApiError::unavailable(id),
            other => ApiError::Store(other),
        })?
        .into();

    if !public_read(&document).is_allowed() {
        return Err(ApiError::unavailable(id));
    }

    Ok(Json(document.into()))
}

/// Build public routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/public/documents/{id}", get(get_public_document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_public_response_drops_sharing_set() {
        let mut shared_with = BTreeSet::new();
        shared_with.insert(UserId::new());

        let document = Document {
            id: DocumentId::new(),
            title: "Plan".to_string(),
            owner: UserId::new(),
            is_public: true,
            shared_with,
            created: Utc::now(),
            last_modified: Utc::now(),
        };

        let response: PublicDocumentResponse = document.into();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("shared_with").is_none());
        assert!(json.get("is_public").is_none());
        assert!(json.get("title").is_some());
    }
}
