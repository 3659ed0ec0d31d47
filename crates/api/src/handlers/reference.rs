//! Handlers for reference data (project types, roles).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use praxis_db::models::project_type::ProjectTypeWithConstraints;
use praxis_db::repositories::{ProjectTypeRepo, RoleRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/project-types
///
/// Lists each type with its duration bounds and role constraints so the
/// request layer can render windows and team forms without extra round trips.
pub async fn list_project_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let types = ProjectTypeRepo::list(&state.pool).await?;
    let mut result = Vec::with_capacity(types.len());
    for project_type in types {
        let role_constraints =
            ProjectTypeRepo::role_constraints(&state.pool, project_type.id).await?;
        result.push(ProjectTypeWithConstraints {
            project_type,
            role_constraints,
        });
    }
    Ok(Json(DataResponse { data: result }))
}

/// GET /api/v1/roles
pub async fn list_roles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let roles = RoleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: roles }))
}
