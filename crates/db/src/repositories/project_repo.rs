//! Repository for the `projects` table.

use praxis_core::project::ProjectStatus;
use praxis_core::types::{Date, EntityId};
use sqlx::PgPool;

use crate::models::project::{NewProject, Project};
use crate::repositories::PgTx;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, application_id, project_type_id, status, deadline, creator_id, created_at, approved_at";

/// Provides persistence operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert the project row created on approval. Status defaults to
    /// `approved` and `approved_at` to now.
    pub async fn create_in_tx(
        tx: &mut PgTx<'_>,
        input: &NewProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (application_id, project_type_id, deadline, creator_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.application_id)
            .bind(input.project_type_id)
            .bind(input.deadline)
            .bind(input.creator_id)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by ID, taking a row lock for the duration of the
    /// transaction. Serializes concurrent start/rollback/team mutations.
    pub async fn find_by_id_for_update(
        tx: &mut PgTx<'_>,
        id: EntityId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Find the project created from a given application, if any.
    pub async fn find_by_application(
        pool: &PgPool,
        application_id: EntityId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE application_id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(application_id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Set the project status. Returns the updated row, or `None` if no row
    /// with the given `id` exists.
    pub async fn set_status_in_tx(
        tx: &mut PgTx<'_>,
        id: EntityId,
        status: ProjectStatus,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET status = $2 WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Move the project deadline. Returns the updated row, or `None` if no
    /// row with the given `id` exists.
    pub async fn update_deadline(
        pool: &PgPool,
        id: EntityId,
        deadline: Date,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET deadline = $2 WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(deadline)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project (rollback). Team members cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete_in_tx(tx: &mut PgTx<'_>, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
