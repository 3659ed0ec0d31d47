pub mod application;
pub mod health;
pub mod project;
pub mod reference;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /applications                      list, create
/// /applications/{id}                 get, update, delete
/// /applications/{id}/approve         approve into a project (POST)
/// /applications/{id}/reject          reject (POST)
///
/// /projects                          list
/// /projects/{id}                     get
/// /projects/{id}/start               start (POST)
/// /projects/{id}/rollback            rollback (POST)
/// /projects/{id}/deadline            move deadline (PUT)
/// /projects/{id}/team                get, save batch (PUT)
/// /projects/{id}/team/{user_id}      change role (PATCH), remove (DELETE)
///
/// /project-types                     reference data
/// /roles                             reference data
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/applications", application::router())
        .nest("/projects", project::router())
        .merge(reference::router())
}
