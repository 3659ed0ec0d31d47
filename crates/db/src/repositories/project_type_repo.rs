//! Repository for the `project_types` reference tables.

use praxis_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_type::{ProjectType, RoleConstraintRow};

/// Column list for project_types queries.
const TYPE_COLUMNS: &str = "id, name, min_estimated_months, max_estimated_months, created_at";

/// Column list for project_type_role_constraints queries.
const CONSTRAINT_COLUMNS: &str = "project_type_id, role_id, min_count, max_count";

/// Provides read operations for project types and their role constraints.
/// The catalog is reference data maintained out-of-band.
pub struct ProjectTypeRepo;

impl ProjectTypeRepo {
    /// Find a project type by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectType>, sqlx::Error> {
        let query = format!("SELECT {TYPE_COLUMNS} FROM project_types WHERE id = $1");
        sqlx::query_as::<_, ProjectType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all project types, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectType>, sqlx::Error> {
        let query = format!("SELECT {TYPE_COLUMNS} FROM project_types ORDER BY name ASC");
        sqlx::query_as::<_, ProjectType>(&query).fetch_all(pool).await
    }

    /// List the per-role constraints for a project type.
    pub async fn role_constraints(
        pool: &PgPool,
        project_type_id: DbId,
    ) -> Result<Vec<RoleConstraintRow>, sqlx::Error> {
        let query = format!(
            "SELECT {CONSTRAINT_COLUMNS} FROM project_type_role_constraints
             WHERE project_type_id = $1 ORDER BY role_id ASC"
        );
        sqlx::query_as::<_, RoleConstraintRow>(&query)
            .bind(project_type_id)
            .fetch_all(pool)
            .await
    }
}
