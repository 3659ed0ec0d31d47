//! Repository for the `team_members` table.

use praxis_core::types::{DbId, EntityId};
use sqlx::PgPool;

use crate::models::team_member::TeamMember;
use crate::repositories::PgTx;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "project_id, user_id, role_id, created_at, updated_at";

/// Provides persistence operations for team members.
pub struct TeamMemberRepo;

impl TeamMemberRepo {
    /// List a project's team, oldest member first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: EntityId,
    ) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM team_members WHERE project_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List a project's team inside a transaction. Callers lock the project
    /// row first so counts reflect current storage, not a client snapshot.
    pub async fn list_by_project_in_tx(
        tx: &mut PgTx<'_>,
        project_id: EntityId,
    ) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM team_members WHERE project_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(project_id)
            .fetch_all(&mut **tx)
            .await
    }

    /// Find one member by the (project, user) pair.
    pub async fn find(
        pool: &PgPool,
        project_id: EntityId,
        user_id: DbId,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM team_members WHERE project_id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(project_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a member, or update the role if the (project, user) pair
    /// already exists.
    pub async fn upsert_in_tx(
        tx: &mut PgTx<'_>,
        project_id: EntityId,
        user_id: DbId,
        role_id: DbId,
    ) -> Result<TeamMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO team_members (project_id, user_id, role_id)
             VALUES ($1, $2, $3)
             ON CONFLICT (project_id, user_id)
             DO UPDATE SET role_id = EXCLUDED.role_id, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(project_id)
            .bind(user_id)
            .bind(role_id)
            .fetch_one(&mut **tx)
            .await
    }

    /// Remove one member. Returns `true` if a row was removed.
    pub async fn delete_in_tx(
        tx: &mut PgTx<'_>,
        project_id: EntityId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE project_id = $1 AND user_id = $2")
            .bind(project_id)
            .bind(user_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a project's entire team (rollback). Returns the removed count.
    pub async fn delete_all_in_tx(
        tx: &mut PgTx<'_>,
        project_id: EntityId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }
}
