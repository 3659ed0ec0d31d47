//! Repository for the `applications` table and its association tables.

use praxis_core::application::ApplicationStatus;
use praxis_core::types::{DbId, EntityId};
use sqlx::PgPool;

use crate::models::application::{Application, CreateApplication, UpdateApplication};
use crate::repositories::PgTx;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, short_description, description, deadline, status, author_id, created_at, updated_at";

/// Provides persistence operations for applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new application with its associations, returning the created
    /// row. Runs in a single transaction.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateApplication,
    ) -> Result<Application, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO applications (title, short_description, description, deadline, author_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.description)
            .bind(input.deadline)
            .bind(author_id)
            .fetch_one(&mut *tx)
            .await?;

        replace_links(
            &mut tx,
            "application_faculties",
            "faculty_id",
            application.id,
            &input.faculty_ids,
        )
        .await?;
        replace_links(
            &mut tx,
            "application_project_types",
            "project_type_id",
            application.id,
            &input.project_type_ids,
        )
        .await?;
        replace_links(
            &mut tx,
            "application_problem_types",
            "problem_type_id",
            application.id,
            &input.problem_type_ids,
        )
        .await?;

        tx.commit().await?;
        Ok(application)
    }

    /// Find an application by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an application by ID, taking a row lock for the duration of the
    /// transaction. Serializes concurrent lifecycle transitions on the same
    /// application.
    pub async fn find_by_id_for_update(
        tx: &mut PgTx<'_>,
        id: EntityId,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// List all applications, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications ORDER BY created_at DESC");
        sqlx::query_as::<_, Application>(&query).fetch_all(pool).await
    }

    /// Update metadata and association sets. Only non-`None` fields are
    /// applied; an association field of `Some(ids)` replaces that set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_in_tx(
        tx: &mut PgTx<'_>,
        id: EntityId,
        input: &UpdateApplication,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "UPDATE applications SET
                title = COALESCE($2, title),
                short_description = COALESCE($3, short_description),
                description = COALESCE($4, description),
                deadline = COALESCE($5, deadline),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(application) = sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.description)
            .bind(input.deadline)
            .fetch_optional(&mut **tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(ids) = &input.faculty_ids {
            replace_links(tx, "application_faculties", "faculty_id", id, ids).await?;
        }
        if let Some(ids) = &input.project_type_ids {
            replace_links(tx, "application_project_types", "project_type_id", id, ids).await?;
        }
        if let Some(ids) = &input.problem_type_ids {
            replace_links(tx, "application_problem_types", "problem_type_id", id, ids).await?;
        }

        Ok(Some(application))
    }

    /// Update metadata and associations in a fresh transaction.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateApplication,
    ) -> Result<Option<Application>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = Self::update_in_tx(&mut tx, id, input).await?;
        tx.commit().await?;
        Ok(result)
    }

    /// Set the application status. Returns `true` if a row was updated.
    pub async fn set_status_in_tx(
        tx: &mut PgTx<'_>,
        id: EntityId,
        status: ApplicationStatus,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE applications SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(status.as_str())
                .execute(&mut **tx)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete an application. Association rows cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch the association ids for one application, for detail views.
    pub async fn association_ids(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<(Vec<DbId>, Vec<DbId>, Vec<DbId>), sqlx::Error> {
        let faculties: Vec<DbId> = sqlx::query_scalar(
            "SELECT faculty_id FROM application_faculties WHERE application_id = $1 ORDER BY faculty_id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        let project_types: Vec<DbId> = sqlx::query_scalar(
            "SELECT project_type_id FROM application_project_types WHERE application_id = $1 ORDER BY project_type_id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        let problem_types: Vec<DbId> = sqlx::query_scalar(
            "SELECT problem_type_id FROM application_problem_types WHERE application_id = $1 ORDER BY problem_type_id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok((faculties, project_types, problem_types))
    }
}

/// Replace one association set: delete existing links, insert the new ids.
async fn replace_links(
    tx: &mut PgTx<'_>,
    table: &str,
    column: &str,
    application_id: EntityId,
    ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query(&format!("DELETE FROM {table} WHERE application_id = $1"))
        .bind(application_id)
        .execute(&mut **tx)
        .await?;
    for id in ids {
        sqlx::query(&format!(
            "INSERT INTO {table} (application_id, {column}) VALUES ($1, $2)
             ON CONFLICT DO NOTHING"
        ))
        .bind(application_id)
        .bind(id)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}
