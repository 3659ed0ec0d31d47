//! Handlers for the `/applications` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use praxis_core::error::CoreError;
use praxis_core::{application, deadline};
use praxis_core::types::EntityId;
use praxis_db::models::application::{
    Application, ApplicationDetail, CreateApplication, UpdateApplication,
};
use praxis_db::models::project::ApproveApplication;
use praxis_db::repositories::ApplicationRepo;

use crate::error::{AppError, AppResult};
use crate::lifecycle;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch an application or fail with `NotFound`.
async fn ensure_application_exists(
    pool: &sqlx::PgPool,
    id: EntityId,
) -> AppResult<Application> {
    ApplicationRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Application", id)))
}

/// POST /api/v1/applications
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateApplication>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let application = ApplicationRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        application_id = %application.id,
        author_id = auth.user_id,
        "Application submitted"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: application })))
}

/// GET /api/v1/applications
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let applications = ApplicationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: applications }))
}

/// GET /api/v1/applications/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let application = ensure_application_exists(&state.pool, id).await?;
    let (faculty_ids, project_type_ids, problem_type_ids) =
        ApplicationRepo::association_ids(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: ApplicationDetail {
            application,
            faculty_ids,
            project_type_ids,
            problem_type_ids,
        },
    }))
}

/// PUT /api/v1/applications/{id}
///
/// Permitted only while pending, and only by the author.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateApplication>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let existing = ensure_application_exists(&state.pool, id).await?;
    if existing.author_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "only the author may edit an application".into(),
        )));
    }
    application::ensure_editable(existing.status)?;

    // Deadline edits follow the same window as post-approval moves: forward
    // by at most one month from the current value, never backward.
    if let Some(new_deadline) = input.deadline {
        if new_deadline != existing.deadline {
            deadline::validate_deadline(
                new_deadline,
                &deadline::window_for_edit(existing.deadline),
            )?;
        }
    }

    let updated = ApplicationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Application", id)))?;

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/applications/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    let existing = ensure_application_exists(&state.pool, id).await?;
    application::ensure_deletable(existing.status, existing.author_id, auth.user_id)?;

    ApplicationRepo::delete(&state.pool, id).await?;
    tracing::info!(application_id = %id, author_id = auth.user_id, "Application deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/applications/{id}/approve
pub async fn approve(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<EntityId>,
    Json(input): Json<ApproveApplication>,
) -> AppResult<impl IntoResponse> {
    let project = lifecycle::approve_application(&state.pool, &auth, id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// POST /api/v1/applications/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let application = lifecycle::reject_application(&state.pool, &auth, id).await?;
    Ok(Json(DataResponse { data: application }))
}
