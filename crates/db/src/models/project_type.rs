//! Project type reference data.

use praxis_core::team::RoleConstraint;
use praxis_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A project type row: the duration bounds that drive deadline windows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectType {
    pub id: DbId,
    pub name: String,
    pub min_estimated_months: i32,
    pub max_estimated_months: i32,
    pub created_at: Timestamp,
}

/// A per-role headcount constraint row for a project type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoleConstraintRow {
    pub project_type_id: DbId,
    pub role_id: DbId,
    pub min_count: i32,
    /// `NULL` means unbounded.
    pub max_count: Option<i32>,
}

impl RoleConstraintRow {
    /// Convert to the domain constraint used by the composition validator.
    pub fn to_constraint(&self) -> RoleConstraint {
        RoleConstraint {
            role_id: self.role_id,
            min_count: self.min_count.max(0) as u32,
            max_count: self.max_count.map(|m| m.max(0) as u32),
        }
    }
}

/// Project type with its role constraints, for the reference endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectTypeWithConstraints {
    #[serde(flatten)]
    pub project_type: ProjectType,
    pub role_constraints: Vec<RoleConstraintRow>,
}
