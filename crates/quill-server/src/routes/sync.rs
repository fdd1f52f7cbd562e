//! HTTP adapter for the sync engine hooks.
//!
//! The collaborative editing engine runs as a separate service and owns
//! the operation log. It calls back into this API at three points:
//! - POST /sync/documents/{id}/check-read - May this actor receive data?
//! - POST /sync/documents/{id}/check-write - May this actor submit steps?
//! - POST /sync/documents/{id}/commit - A content change was committed
//!
//! The engine resolves its own session identity and passes the actor id
//! along; an absent actor is an unauthenticated session and is always
//! denied. Request bodies carry only what the hooks need; any step or
//! snapshot payload stays on the engine's side.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::post,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::{DocumentId, UserId};

use crate::error::ApiResult;
use crate::state::AppState;
use crate::sync::SyncGateway;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for the check hooks.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    /// Resolved actor for the engine session, absent when unauthenticated.
    #[serde(default)]
    pub actor: Option<UserId>,
}

/// Response for a passed check.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    pub allowed: bool,
}

/// Response for POST /sync/documents/{id}/commit.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommitResponse {
    /// Always true; the engine's commit is never rolled back from here.
    pub committed: bool,
    /// Whether the document's `last_modified` was actually advanced.
    pub last_modified_updated: bool,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /sync/documents/{id}/check-read
async fn check_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CheckRequest>,
) -> ApiResult<Json<CheckResponse>> {
    let gateway = SyncGateway::new(state.store().clone());
    gateway
        .check_read(DocumentId::from_uuid(id), request.actor)
        .await?;
    Ok(Json(CheckResponse { allowed: true }))
}

/// POST /sync/documents/{id}/check-write
async fn check_write(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CheckRequest>,
) -> ApiResult<Json<CheckResponse>> {
    let gateway = SyncGateway::new(state.store().clone());
    gateway
        .check_write(DocumentId::from_uuid(id), request.actor)
        .await?;
    Ok(Json(CheckResponse { allowed: true }))
}

/// POST /sync/documents/{id}/commit
///
/// Acknowledges a durable content commit. Always succeeds; a failed
/// timestamp touch is reported in the body, never as an error status.
async fn commit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<CommitResponse> {
    let gateway = SyncGateway::new(state.store().clone());
    let last_modified_updated = gateway.on_commit(DocumentId::from_uuid(id)).await;
    Json(CommitResponse {
        committed: true,
        last_modified_updated,
    })
}

/// Build sync hook routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sync/documents/{id}/check-read", post(check_read))
        .route("/sync/documents/{id}/check-write", post(check_write))
        .route("/sync/documents/{id}/commit", post(commit))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_request_actor_optional() {
        let request: CheckRequest = serde_json::from_str("{}").unwrap();
        assert!(request.actor.is_none());

        let user = UserId::new();
        let json = format!(r#"{{"actor": "{}"}}"#, user);
        let request: CheckRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.actor, Some(user));
    }

    #[test]
    fn test_commit_response_shape() {
        let response = CommitResponse {
            committed: true,
            last_modified_updated: false,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["committed"], true);
        assert_eq!(json["last_modified_updated"], false);
    }
}
