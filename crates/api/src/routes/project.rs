//! Route definitions for the `/projects` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{project, team};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                          -> list
/// GET    /{id}                      -> get_by_id
/// POST   /{id}/start                -> start
/// POST   /{id}/rollback             -> rollback
/// PUT    /{id}/deadline             -> update_deadline
/// GET    /{id}/team                 -> get_team
/// PUT    /{id}/team                 -> save_team
/// PATCH  /{id}/team/{user_id}       -> update_member_role
/// DELETE /{id}/team/{user_id}       -> remove_member
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/{id}", get(project::get_by_id))
        .route("/{id}/start", post(project::start))
        .route("/{id}/rollback", post(project::rollback))
        .route("/{id}/deadline", put(project::update_deadline))
        .route("/{id}/team", get(team::get_team).put(team::save_team))
        .route(
            "/{id}/team/{user_id}",
            axum::routing::patch(team::update_member_role).delete(team::remove_member),
        )
}
