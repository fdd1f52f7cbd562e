//! User lookup routes.
//!
//! - GET /users/search?q= - Name search over the external user records
//!
//! This is how an owner finds the person they want to share a document
//! with. The user table is consumed read-only; search never reveals more
//! than the display fields the auth system already recorded.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};

use quill_core::UserProfile;

use crate::error::ApiResult;
use crate::extract::ActorIdentity;
use crate::routes::documents::{SearchParams, normalized_query};
use crate::state::AppState;

/// Response for GET /users/search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchUsersResponse {
    pub users: Vec<UserProfile>,
}

/// GET /users/search?q= - Name search, capped at the store level.
///
/// Empty or whitespace-only text returns an empty result without touching
/// the index, same as document search.
async fn search_users(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<SearchUsersResponse>> {
    let Some(text) = normalized_query(&params.q) else {
        return Ok(Json(SearchUsersResponse { users: vec![] }));
    };

    let rows = state.store().search_users(text).await?;

    tracing::debug!(actor = %actor, query = %text, count = rows.len(), "Searched users");

    Ok(Json(SearchUsersResponse {
        users: rows.into_iter().map(Into::into).collect(),
    }))
}

/// Build user lookup routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users/search", get(search_users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::UserId;

    #[test]
    fn test_response_carries_profiles() {
        let response = SearchUsersResponse {
            users: vec![UserProfile {
                id: UserId::new(),
                display_name: Some("Ada".to_string()),
                email: None,
                picture_url: None,
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["users"][0]["display_name"], "Ada");
    }

    #[test]
    fn test_empty_response_shape() {
        let response = SearchUsersResponse { users: vec![] };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["users"].as_array().unwrap().is_empty());
    }
}
