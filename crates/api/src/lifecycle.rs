//! Lifecycle orchestrator.
//!
//! Coordinates the multi-entity transitions of the application/project
//! lifecycle: approve-and-create, reject, start, rollback, deadline moves,
//! and team mutations. Every operation here runs as one transaction with
//! the status check inside it (`SELECT ... FOR UPDATE`), so concurrent
//! attempts on the same entity serialize instead of racing: a double
//! approval cannot create two projects, and interleaved team additions
//! cannot exceed a role's maximum.

use praxis_core::error::CoreError;
use praxis_core::team::RoleConstraint;
use praxis_core::types::{DbId, EntityId};
use praxis_core::{application, deadline, project, team};
use praxis_db::models::application::Application;
use praxis_db::models::project::{ApproveApplication, NewProject, Project, UpdateProjectDeadline};
use praxis_db::models::team_member::{SaveTeam, TeamMember};
use praxis_db::repositories::{ApplicationRepo, ProjectRepo, ProjectTypeRepo, TeamMemberRepo};
use praxis_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// Approve a pending application and create its project, atomically.
///
/// The application's metadata is refreshed from `input.metadata` in the same
/// transaction so later project edits see consistent data. Fails with
/// `Conflict` before any write if the application is no longer pending.
pub async fn approve_application(
    pool: &DbPool,
    actor: &AuthUser,
    application_id: EntityId,
    input: &ApproveApplication,
) -> AppResult<Project> {
    actor.ensure_professor()?;
    input.metadata.validate()?;

    // Cardinality is a business rule, not a parse failure: the request layer
    // may submit a list, the domain requires exactly one type.
    let [project_type_id] = input.project_type_ids[..] else {
        return Err(AppError::Core(CoreError::BusinessRule(format!(
            "exactly one project type must be selected for approval, got {}",
            input.project_type_ids.len()
        ))));
    };

    let project_type = ProjectTypeRepo::find_by_id(pool, project_type_id)
        .await?
        .ok_or_else(|| CoreError::not_found("ProjectType", project_type_id))?;

    let mut tx = pool.begin().await?;

    let app = ApplicationRepo::find_by_id_for_update(&mut tx, application_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Application", application_id))?;
    application::ensure_approvable(app.status)?;

    let window = deadline::window_for_new(
        app.created_at.date_naive(),
        project_type.min_estimated_months.max(0) as u32,
        project_type.max_estimated_months.max(0) as u32,
    );
    deadline::validate_deadline(input.deadline, &window)?;

    // Metadata refresh runs even though the application is about to leave
    // `pending`; the approved record must reflect the reviewed content.
    ApplicationRepo::update_in_tx(&mut tx, application_id, &input.metadata)
        .await?
        .ok_or_else(|| CoreError::Internal("application row vanished under lock".into()))?;

    ApplicationRepo::set_status_in_tx(
        &mut tx,
        application_id,
        application::ApplicationStatus::Approved,
    )
    .await?;

    let created = ProjectRepo::create_in_tx(
        &mut tx,
        &NewProject {
            application_id,
            project_type_id,
            deadline: input.deadline,
            creator_id: actor.user_id,
        },
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        application_id = %application_id,
        project_id = %created.id,
        creator_id = actor.user_id,
        "Application approved, project created"
    );
    Ok(created)
}

/// Reject a pending application. Terminal; no project is created.
pub async fn reject_application(
    pool: &DbPool,
    actor: &AuthUser,
    application_id: EntityId,
) -> AppResult<Application> {
    actor.ensure_professor()?;

    let mut tx = pool.begin().await?;

    let app = ApplicationRepo::find_by_id_for_update(&mut tx, application_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Application", application_id))?;
    application::ensure_rejectable(app.status)?;

    ApplicationRepo::set_status_in_tx(
        &mut tx,
        application_id,
        application::ApplicationStatus::Rejected,
    )
    .await?;

    tx.commit().await?;

    tracing::info!(application_id = %application_id, reviewer_id = actor.user_id, "Application rejected");
    Ok(Application {
        status: application::ApplicationStatus::Rejected,
        ..app
    })
}

/// Start an approved project once its team satisfies the type's constraints.
///
/// Team membership is frozen from this point. Counts are recomputed from
/// storage inside the transaction, independent of insertion order.
pub async fn start_project(
    pool: &DbPool,
    actor: &AuthUser,
    project_id: EntityId,
) -> AppResult<Project> {
    actor.ensure_professor()?;

    let mut tx = pool.begin().await?;

    let proj = ProjectRepo::find_by_id_for_update(&mut tx, project_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", project_id))?;
    if proj.creator_id != actor.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "only the approving professor may start this project".into(),
        )));
    }
    project::ensure_startable(proj.status)?;

    let constraints = load_constraints(pool, proj.project_type_id).await?;
    let members = TeamMemberRepo::list_by_project_in_tx(&mut tx, project_id).await?;
    let member_roles: Vec<DbId> = members.iter().map(|m| m.role_id).collect();

    let violations = team::validate_composition(&member_roles, &constraints);
    if !violations.is_empty() {
        let details: Vec<String> = violations.iter().map(ToString::to_string).collect();
        return Err(AppError::Core(CoreError::BusinessRule(format!(
            "team composition incomplete: {}",
            details.join("; ")
        ))));
    }

    let started = ProjectRepo::set_status_in_tx(&mut tx, project_id, project::ProjectStatus::InProgress)
        .await?
        .ok_or_else(|| CoreError::Internal("project row vanished under lock".into()))?;

    tx.commit().await?;

    tracing::info!(project_id = %project_id, team_size = members.len(), "Project started");
    Ok(started)
}

/// Roll an approved project back into a pending application.
///
/// Destructive: deletes the project and its team members and reopens the
/// application. Only legal from `approved` and only for the project's
/// creator. Either everything commits or nothing does; there is no silent
/// no-op path.
pub async fn rollback_project(
    pool: &DbPool,
    actor: &AuthUser,
    project_id: EntityId,
) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let proj = ProjectRepo::find_by_id_for_update(&mut tx, project_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", project_id))?;
    if proj.creator_id != actor.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "only the approving professor may roll back this project".into(),
        )));
    }
    project::ensure_rollbackable(proj.status)?;

    let removed_members = TeamMemberRepo::delete_all_in_tx(&mut tx, project_id).await?;
    if !ProjectRepo::delete_in_tx(&mut tx, project_id).await? {
        return Err(AppError::Core(CoreError::Internal(
            "project row vanished under lock".into(),
        )));
    }
    if !ApplicationRepo::set_status_in_tx(
        &mut tx,
        proj.application_id,
        application::ApplicationStatus::Pending,
    )
    .await?
    {
        // A project without its application is an invariant violation.
        return Err(AppError::Core(CoreError::Internal(
            "linked application missing during rollback".into(),
        )));
    }

    tx.commit().await?;

    tracing::info!(
        project_id = %project_id,
        application_id = %proj.application_id,
        removed_members,
        "Project rolled back to pending application"
    );
    Ok(())
}

/// Move an approved project's deadline.
///
/// The window re-anchors to the current deadline (forward by at most one
/// month, never backward), independent of project status.
pub async fn update_project_deadline(
    pool: &DbPool,
    project_id: EntityId,
    input: &UpdateProjectDeadline,
) -> AppResult<Project> {
    let proj = ProjectRepo::find_by_id(pool, project_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", project_id))?;

    let window = deadline::window_for_edit(proj.deadline);
    deadline::validate_deadline(input.deadline, &window)?;

    let updated = ProjectRepo::update_deadline(pool, project_id, input.deadline)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", project_id))?;

    tracing::info!(project_id = %project_id, deadline = %input.deadline, "Project deadline moved");
    Ok(updated)
}

/// Save a batch of team members (insert or role change per entry).
///
/// Each mutation re-runs the fast-path checks against persisted counts, not
/// the caller's snapshot, so interleaved saves cannot exceed a role maximum.
/// Returns the full team after the batch.
pub async fn save_team(
    pool: &DbPool,
    project_id: EntityId,
    input: &SaveTeam,
) -> AppResult<Vec<TeamMember>> {
    let mut tx = pool.begin().await?;

    let proj = ProjectRepo::find_by_id_for_update(&mut tx, project_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", project_id))?;
    project::ensure_team_mutable(proj.status)?;

    let constraints = load_constraints(pool, proj.project_type_id).await?;
    let mut members = TeamMemberRepo::list_by_project_in_tx(&mut tx, project_id).await?;

    for entry in &input.members {
        check_member_addition(&members, entry.user_id, entry.role_id, &constraints)?;
        let saved =
            TeamMemberRepo::upsert_in_tx(&mut tx, project_id, entry.user_id, entry.role_id).await?;
        match members.iter_mut().find(|m| m.user_id == entry.user_id) {
            Some(existing) => *existing = saved,
            None => members.push(saved),
        }
    }

    let team = TeamMemberRepo::list_by_project_in_tx(&mut tx, project_id).await?;
    tx.commit().await?;

    tracing::info!(project_id = %project_id, team_size = team.len(), "Team saved");
    Ok(team)
}

/// Change one member's role, with the same constraint checks as a save.
pub async fn update_team_member_role(
    pool: &DbPool,
    project_id: EntityId,
    user_id: DbId,
    role_id: DbId,
) -> AppResult<TeamMember> {
    let mut tx = pool.begin().await?;

    let proj = ProjectRepo::find_by_id_for_update(&mut tx, project_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", project_id))?;
    project::ensure_team_mutable(proj.status)?;

    let members = TeamMemberRepo::list_by_project_in_tx(&mut tx, project_id).await?;
    if !members.iter().any(|m| m.user_id == user_id) {
        return Err(AppError::Core(CoreError::not_found("TeamMember", user_id)));
    }

    let constraints = load_constraints(pool, proj.project_type_id).await?;
    check_member_addition(&members, user_id, role_id, &constraints)?;

    let updated = TeamMemberRepo::upsert_in_tx(&mut tx, project_id, user_id, role_id).await?;
    tx.commit().await?;

    tracing::info!(project_id = %project_id, user_id, role_id, "Team member role updated");
    Ok(updated)
}

/// Remove one member while the team is still mutable.
pub async fn remove_team_member(
    pool: &DbPool,
    project_id: EntityId,
    user_id: DbId,
) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let proj = ProjectRepo::find_by_id_for_update(&mut tx, project_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", project_id))?;
    project::ensure_team_mutable(proj.status)?;

    if !TeamMemberRepo::delete_in_tx(&mut tx, project_id, user_id).await? {
        return Err(AppError::Core(CoreError::not_found("TeamMember", user_id)));
    }

    tx.commit().await?;

    tracing::info!(project_id = %project_id, user_id, "Team member removed");
    Ok(())
}

/// Load a project type's role constraints as domain values.
async fn load_constraints(
    pool: &DbPool,
    project_type_id: DbId,
) -> Result<Vec<RoleConstraint>, AppError> {
    let rows = ProjectTypeRepo::role_constraints(pool, project_type_id).await?;
    Ok(rows.iter().map(|r| r.to_constraint()).collect())
}

/// Validate adding `user_id` with `role_id` against current members.
///
/// A role change for an existing member counts against the new role with the
/// member's old entry excluded.
fn check_member_addition(
    members: &[TeamMember],
    user_id: DbId,
    role_id: DbId,
    constraints: &[RoleConstraint],
) -> Result<(), AppError> {
    if !team::is_role_allowed(role_id, constraints) {
        return Err(AppError::Core(CoreError::BusinessRule(format!(
            "role {role_id} is not allowed for this project type"
        ))));
    }
    let other_roles: Vec<DbId> = members
        .iter()
        .filter(|m| m.user_id != user_id)
        .map(|m| m.role_id)
        .collect();
    if !team::can_add_member(&other_roles, role_id, constraints) {
        return Err(AppError::Core(CoreError::BusinessRule(format!(
            "adding a member with role {role_id} would exceed the role's maximum"
        ))));
    }
    Ok(())
}
