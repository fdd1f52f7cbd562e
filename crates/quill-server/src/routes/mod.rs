//! Route definitions for the HTTP API.

pub mod documents;
pub mod health;
pub mod public;
pub mod share;
pub mod sync;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(documents::routes())
        .merge(share::routes())
        .merge(public::routes())
        .merge(sync::routes())
        .merge(users::routes())
        .with_state(state)
}
