//! Application entity model and DTOs.

use praxis_core::application::ApplicationStatus;
use praxis_core::types::{Date, DbId, EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An application row from the `applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: EntityId,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub deadline: Date,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub author_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An application together with its association ids, for detail views.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationDetail {
    #[serde(flatten)]
    pub application: Application,
    pub faculty_ids: Vec<DbId>,
    pub project_type_ids: Vec<DbId>,
    pub problem_type_ids: Vec<DbId>,
}

/// DTO for submitting a new application.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateApplication {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 500))]
    pub short_description: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub deadline: Date,
    #[serde(default)]
    pub faculty_ids: Vec<DbId>,
    /// Unconstrained at request time; singularity is enforced at approval.
    #[serde(default)]
    pub project_type_ids: Vec<DbId>,
    #[serde(default)]
    pub problem_type_ids: Vec<DbId>,
}

/// DTO for editing a pending application. All fields are optional; `None`
/// leaves the stored value (or association set) untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateApplication {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub short_description: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub deadline: Option<Date>,
    pub faculty_ids: Option<Vec<DbId>>,
    pub project_type_ids: Option<Vec<DbId>>,
    pub problem_type_ids: Option<Vec<DbId>>,
}
