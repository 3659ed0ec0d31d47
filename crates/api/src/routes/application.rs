//! Route definitions for the `/applications` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::application;
use crate::state::AppState;

/// Routes mounted at `/applications`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// POST   /{id}/approve    -> approve
/// POST   /{id}/reject     -> reject
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(application::list).post(application::create))
        .route(
            "/{id}",
            get(application::get_by_id)
                .put(application::update)
                .delete(application::delete),
        )
        .route("/{id}/approve", post(application::approve))
        .route("/{id}/reject", post(application::reject))
}
