//! Route definitions for reference data.

use axum::routing::get;
use axum::Router;

use crate::handlers::reference;
use crate::state::AppState;

/// Routes for the read-only reference catalog.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/project-types", get(reference::list_project_types))
        .route("/roles", get(reference::list_roles))
}
