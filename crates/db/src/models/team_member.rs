//! Team member model and DTOs.

use praxis_core::types::{DbId, EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A team member row; identity is the (project, user) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub project_id: EntityId,
    pub user_id: DbId,
    pub role_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One entry of a team-save batch.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamMemberInput {
    pub user_id: DbId,
    pub role_id: DbId,
}

/// Batch payload for `PUT /projects/{id}/team`.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveTeam {
    pub members: Vec<TeamMemberInput>,
}

/// Payload for changing a single member's role.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeamMemberRole {
    pub role_id: DbId,
}
