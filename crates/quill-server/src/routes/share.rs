//! Sharing routes.
//!
//! The owner manages a per-document set of users with read/write access:
//! - POST /documents/{id}/share - Grant access to a user
//! - DELETE /documents/{id}/share/{user_id} - Revoke access
//! - GET /documents/{id}/share - List grants, enriched with user profiles
//!
//! Grant and revoke are set operations. Repeating a grant or revoking a
//! user who was never shared succeeds without changing anything.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, post},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use quill_core::{Capability, Document, UserId, UserProfile};

use crate::error::ApiResult;
use crate::extract::ActorIdentity;
use crate::routes::documents::load_authorized;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /documents/{id}/share.
#[derive(Debug, Deserialize)]
pub struct GrantShareRequest {
    /// User to grant access to.
    pub user_id: UserId,
}

/// Response for grant and revoke.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShareResponse {
    /// The sharing set after the mutation.
    pub shared_with: BTreeSet<UserId>,
}

/// One sharing grant with whatever profile data the auth system has.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShareGrant {
    /// The granted user.
    pub user_id: UserId,
    /// Display name, if the auth system knows one.
    pub display_name: Option<String>,
    /// Email, if known.
    pub email: Option<String>,
    /// Avatar URL, if known.
    pub picture_url: Option<String>,
}

impl ShareGrant {
    fn from_profile(profile: UserProfile) -> Self {
        Self {
            user_id: profile.id,
            display_name: profile.display_name,
            email: profile.email,
            picture_url: profile.picture_url,
        }
    }

    /// Grant for a user id with no matching auth record. The grant stays
    /// listed; only the display fields are missing.
    fn bare(user_id: UserId) -> Self {
        Self {
            user_id,
            display_name: None,
            email: None,
            picture_url: None,
        }
    }
}

/// Response for GET /documents/{id}/share.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListSharesResponse {
    pub shares: Vec<ShareGrant>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /documents/{id}/share - Grant a user access. Owner only.
///
/// Granting the owner themselves is rejected; owner access is implicit
/// and never appears in the sharing set.
async fn grant_share(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Path(id): Path<Uuid>,
    Json(request): Json<GrantShareRequest>,
) -> ApiResult<Json<ShareResponse>> {
    load_authorized(&state, id, actor, Capability::ManageSharing).await?;

    let row = state
        .store()
        .grant_share(id, *request.user_id.as_uuid())
        .await?;

    tracing::info!(document = %id, user = %request.user_id, "Share granted");

    let document: Document = row.into();
    Ok(Json(ShareResponse {
        shared_with: document.shared_with,
    }))
}

/// DELETE /documents/{id}/share/{user_id} - Revoke a user's access. Owner only.
///
/// Takes effect at the access-check boundary: a revoked user's next
/// authorization fails, but any session the sync engine already
/// established is outside this system's reach.
async fn revoke_share(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Path((id, user_id)): Path<(Uuid, UserId)>,
) -> ApiResult<Json<ShareResponse>> {
    load_authorized(&state, id, actor, Capability::ManageSharing).await?;

    let row = state.store().revoke_share(id, *user_id.as_uuid()).await?;

    tracing::info!(document = %id, user = %user_id, "Share revoked");

    let document: Document = row.into();
    Ok(Json(ShareResponse {
        shared_with: document.shared_with,
    }))
}

/// GET /documents/{id}/share - List the sharing set. Owner only.
///
/// Each grant is enriched with the auth system's profile record when one
/// exists. A grant whose user record has vanished is still listed.
async fn list_shares(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ListSharesResponse>> {
    let document = load_authorized(&state, id, actor, Capability::ManageSharing).await?;

    let mut shares = Vec::with_capacity(document.shared_with.len());
    for user_id in &document.shared_with {
        let grant = match state.store().get_user(*user_id.as_uuid()).await? {
            Some(row) => ShareGrant::from_profile(row.into()),
            None => ShareGrant::bare(*user_id),
        };
        shares.push(grant);
    }

    Ok(Json(ListSharesResponse { shares }))
}

/// Build sharing routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/documents/{id}/share", post(grant_share).get(list_shares))
        .route("/documents/{id}/share/{user_id}", delete(revoke_share))
}

// ============================================================================
// Tests
// ============================================================================
