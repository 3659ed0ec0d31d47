//! Project entity model and DTOs.

use praxis_core::project::ProjectStatus;
use praxis_core::types::{Date, DbId, EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: EntityId,
    pub application_id: EntityId,
    pub project_type_id: DbId,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub deadline: Date,
    pub creator_id: DbId,
    pub created_at: Timestamp,
    pub approved_at: Timestamp,
}

/// A project together with its team, for detail views.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub team: Vec<super::team_member::TeamMember>,
}

/// Insert parameters for the project row created on approval.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub application_id: EntityId,
    pub project_type_id: DbId,
    pub deadline: Date,
    pub creator_id: DbId,
}

/// Payload for approving an application into a project.
///
/// The request layer may submit any number of project types; the domain
/// enforces that exactly one was chosen.
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveApplication {
    pub project_type_ids: Vec<DbId>,
    pub deadline: Date,
    /// Metadata refresh applied to the application in the same transaction.
    #[serde(default)]
    pub metadata: super::application::UpdateApplication,
}

/// Payload for moving a project's deadline after approval.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectDeadline {
    pub deadline: Date,
}
