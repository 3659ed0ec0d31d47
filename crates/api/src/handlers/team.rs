//! Handlers for a project's team.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use praxis_core::types::{DbId, EntityId};
use praxis_db::models::team_member::{SaveTeam, UpdateTeamMemberRole};
use praxis_db::repositories::TeamMemberRepo;

use crate::error::AppResult;
use crate::lifecycle;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/{id}/team
pub async fn get_team(
    State(state): State<AppState>,
    Path(project_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let team = TeamMemberRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: team }))
}

/// PUT /api/v1/projects/{id}/team
pub async fn save_team(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(project_id): Path<EntityId>,
    Json(input): Json<SaveTeam>,
) -> AppResult<impl IntoResponse> {
    let team = lifecycle::save_team(&state.pool, project_id, &input).await?;
    Ok(Json(DataResponse { data: team }))
}

/// PATCH /api/v1/projects/{id}/team/{user_id}
pub async fn update_member_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((project_id, user_id)): Path<(EntityId, DbId)>,
    Json(input): Json<UpdateTeamMemberRole>,
) -> AppResult<impl IntoResponse> {
    let member =
        lifecycle::update_team_member_role(&state.pool, project_id, user_id, input.role_id).await?;
    Ok(Json(DataResponse { data: member }))
}

/// DELETE /api/v1/projects/{id}/team/{user_id}
pub async fn remove_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((project_id, user_id)): Path<(EntityId, DbId)>,
) -> AppResult<StatusCode> {
    lifecycle::remove_team_member(&state.pool, project_id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
