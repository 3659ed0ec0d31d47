//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use praxis_core::error::CoreError;
use praxis_core::types::EntityId;
use praxis_db::models::project::{ProjectDetail, UpdateProjectDeadline};
use praxis_db::repositories::{ProjectRepo, TeamMemberRepo};

use crate::error::{AppError, AppResult};
use crate::lifecycle;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;
    let team = TeamMemberRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: ProjectDetail { project, team },
    }))
}

/// POST /api/v1/projects/{id}/start
pub async fn start(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let project = lifecycle::start_project(&state.pool, &auth, id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/projects/{id}/rollback
///
/// Destructive; callers confirm out-of-band before invoking.
pub async fn rollback(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    lifecycle::rollback_project(&state.pool, &auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/projects/{id}/deadline
pub async fn update_deadline(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateProjectDeadline>,
) -> AppResult<impl IntoResponse> {
    let project = lifecycle::update_project_deadline(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data: project }))
}
