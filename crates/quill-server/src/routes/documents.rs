//! Document directory and management routes.
//!
//! This module implements the document-related HTTP endpoints:
//! - GET /documents - Personalized, deduplicated directory listing
//! - GET /documents/search - Capped title search
//! - POST /documents - Create a new document
//! - GET /documents/{id} - Fetch one document (with presence info)
//! - PUT /documents/{id}/title - Rename (owner only)
//! - POST /documents/{id}/visibility - Toggle public flag (owner only)
//! - DELETE /documents/{id} - Hard delete (owner only)

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use quill_core::{
    Capability, Document, DocumentId, UserId, authorize, merge_partitions, sort_by_recency,
};
use quill_store::{NewDocument, StoreError};

use crate::error::{ApiError, ApiResult};
use crate::extract::ActorIdentity;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// One document as seen by the requesting actor.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document ID.
    pub id: DocumentId,
    /// Document title.
    pub title: String,
    /// Owner user id.
    pub owner: UserId,
    /// Whether the requesting actor is the owner.
    pub is_owner: bool,
    /// Whether anyone may read the document.
    pub is_public: bool,
    /// Users the owner has shared the document with.
    pub shared_with: BTreeSet<UserId>,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last metadata or content modification.
    pub last_modified: DateTime<Utc>,
}

impl DocumentSummary {
    fn for_actor(document: Document, actor: UserId) -> Self {
        let is_owner = document.is_owned_by(actor);
        Self {
            id: document.id,
            title: document.title,
            owner: document.owner,
            is_owner,
            is_public: document.is_public,
            shared_with: document.shared_with,
            created: document.created,
            last_modified: document.last_modified,
        }
    }
}

/// Response for GET /documents and GET /documents/search.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListDocumentsResponse {
    pub documents: Vec<DocumentSummary>,
}

/// Query string for GET /documents/search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Title search text.
    #[serde(default)]
    pub q: String,
}

/// Request body for POST /documents.
#[derive(Debug, Deserialize)]
pub struct CreateDocumentRequest {
    /// Title for the new document.
    pub title: String,
    /// Initial visibility; private when omitted.
    #[serde(default)]
    pub is_public: bool,
}

/// Request body for PUT /documents/{id}/title.
#[derive(Debug, Deserialize)]
pub struct RenameDocumentRequest {
    /// New title.
    pub title: String,
}

/// Response for GET /documents/{id}.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetDocumentResponse {
    #[serde(flatten)]
    pub document: DocumentSummary,
    /// Actors currently viewing the document, per the presence service.
    /// Informational only.
    pub viewers: Vec<UserId>,
}

/// Response for DELETE /documents/{id}.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    /// ID of the deleted document.
    pub id: DocumentId,
    /// Confirmation message.
    pub message: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Trim search text; None means "do not contact the index at all".
pub(crate) fn normalized_query(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Load a document and require `capability` for `actor`.
///
/// Failure policy: a missing document and a document outside the actor's
/// visibility produce the same "not available" outcome. A denial on an
/// owner-only capability for an actor who can read the document returns
/// Forbidden instead, since they already know it exists.
pub(crate) async fn load_authorized(
    state: &AppState,
    id: Uuid,
    actor: UserId,
    capability: Capability,
) -> ApiResult<Document> {
    let document: Document = state
        .store()
        .get_document(id)
        .await
        .map_err(|e| match e {
            StoreError::DocumentNotFound(id) => ApiError::unavailable(id),
            other => ApiError::Store(other),
        })?
        .into();

    if authorize(&document, actor, capability).is_allowed() {
        return Ok(document);
    }

    if authorize(&document, actor, Capability::Read).is_allowed() {
        Err(ApiError::Forbidden(owner_only_message(capability)))
    } else {
        Err(ApiError::unavailable(id))
    }
}

fn owner_only_message(capability: Capability) -> String {
    let action = match capability {
        Capability::Rename => "rename it",
        Capability::ManageSharing => "manage sharing",
        Capability::ManageVisibility => "change its visibility",
        Capability::Delete => "delete it",
        Capability::Read | Capability::Write => "access it",
    };
    format!("Only the document owner can {}", action)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /documents - List every document the actor may see.
///
/// Issues the three partition queries (owned, shared, public)
/// concurrently, merges them with first-partition-wins dedup, and orders
/// by last modification with an id tiebreak. An actor with nothing
/// accessible gets an empty array, not an error.
async fn list_documents(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
) -> ApiResult<Json<ListDocumentsResponse>> {
    let store = state.store();
    let user = *actor.as_uuid();

    let (owned, shared, public) = tokio::join!(
        store.list_owned(user),
        store.list_shared_with(user),
        store.list_public(),
    );

    let owned: Vec<Document> = owned?.into_iter().map(Into::into).collect();
    let shared: Vec<Document> = shared?.into_iter().map(Into::into).collect();
    let public: Vec<Document> = public?.into_iter().map(Into::into).collect();

    let mut documents = merge_partitions([owned, shared, public], |d: &Document| d.id);
    sort_by_recency(&mut documents);

    tracing::debug!(actor = %actor, count = documents.len(), "Listed documents");

    Ok(Json(ListDocumentsResponse {
        documents: documents
            .into_iter()
            .map(|d| DocumentSummary::for_actor(d, actor))
            .collect(),
    }))
}

/// GET /documents/search?q= - Title search across own and public documents.
///
/// Empty or whitespace-only text returns an empty result without touching
/// the index. Each partition is independently capped at the store level;
/// the merge preserves relevance order, owner partition first.
async fn search_documents(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<ListDocumentsResponse>> {
    let Some(text) = normalized_query(&params.q) else {
        return Ok(Json(ListDocumentsResponse { documents: vec![] }));
    };

    let store = state.store();
    let user = *actor.as_uuid();

    let (owned, public) = tokio::join!(store.search_owned(user, text), store.search_public(text));

    let owned: Vec<Document> = owned?.into_iter().map(Into::into).collect();
    let public: Vec<Document> = public?.into_iter().map(Into::into).collect();

    let documents = merge_partitions([owned, public], |d: &Document| d.id);

    tracing::debug!(actor = %actor, query = %text, count = documents.len(), "Searched documents");

    Ok(Json(ListDocumentsResponse {
        documents: documents
            .into_iter()
            .map(|d| DocumentSummary::for_actor(d, actor))
            .collect(),
    }))
}

/// POST /documents - Create a new document owned by the actor.
async fn create_document(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Json(request): Json<CreateDocumentRequest>,
) -> ApiResult<(StatusCode, Json<DocumentSummary>)> {
    if request.title.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Document title cannot be empty".to_string(),
        ));
    }

    let new_document = NewDocument::new(request.title, *actor.as_uuid())
        .with_visibility(request.is_public);
    let row = state.store().insert_document(&new_document).await?;

    tracing::info!(document = %row.id, owner = %actor, "Document created");

    Ok((
        StatusCode::CREATED,
        Json(DocumentSummary::for_actor(row.into(), actor)),
    ))
}

/// GET /documents/{id} - Fetch one document the actor may read.
///
/// Includes the current viewer set from the presence service; presence is
/// informational and never gates the read itself.
async fn get_document(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<GetDocumentResponse>> {
    let document = load_authorized(&state, id, actor, Capability::Read).await?;

    let viewers = state.presence().viewers(document.id).await;

    Ok(Json(GetDocumentResponse {
        document: DocumentSummary::for_actor(document, actor),
        viewers,
    }))
}

/// PUT /documents/{id}/title - Rename a document. Owner only.
async fn rename_document(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Path(id): Path<Uuid>,
    Json(request): Json<RenameDocumentRequest>,
) -> ApiResult<Json<DocumentSummary>> {
    if request.title.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Document title cannot be empty".to_string(),
        ));
    }

    load_authorized(&state, id, actor, Capability::Rename).await?;

    let row = state.store().rename_document(id, &request.title).await?;

    tracing::info!(document = %id, "Document renamed");

    Ok(Json(DocumentSummary::for_actor(row.into(), actor)))
}

/// POST /documents/{id}/visibility - Toggle the public flag. Owner only.
async fn toggle_visibility(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DocumentSummary>> {
    load_authorized(&state, id, actor, Capability::ManageVisibility).await?;

    let row = state.store().toggle_visibility(id).await?;

    tracing::info!(document = %id, is_public = row.is_public, "Document visibility toggled");

    Ok(Json(DocumentSummary::for_actor(row.into(), actor)))
}

/// DELETE /documents/{id} - Hard-delete a document. Owner only.
///
/// Terminal: afterwards the id reads as unavailable on every surface,
/// indistinguishable from an id that never existed.
async fn delete_document(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeleteDocumentResponse>> {
    load_authorized(&state, id, actor, Capability::Delete).await?;

    state.store().delete_document(id).await?;

    tracing::info!(document = %id, "Document deleted");

    Ok(Json(DeleteDocumentResponse {
        id: DocumentId::from_uuid(id),
        message: "Document deleted".to_string(),
    }))
}

/// Build document routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/documents", get(list_documents).post(create_document))
        .route("/documents/search", get(search_documents))
        .route("/documents/{id}", get(get_document).delete(delete_document))
        .route("/documents/{id}/title", put(rename_document))
        .route("/documents/{id}/visibility", post(toggle_visibility))
}

// ============================================================================
// Tests
// ============================================================================
