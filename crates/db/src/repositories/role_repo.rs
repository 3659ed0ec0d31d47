//! Repository for the `roles` reference table.

use sqlx::PgPool;

use crate::models::role::Role;

/// Column list for roles queries.
const COLUMNS: &str = "id, name, created_at";

/// Provides read operations for roles.
pub struct RoleRepo;

impl RoleRepo {
    /// List all roles, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles ORDER BY name ASC");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }
}
