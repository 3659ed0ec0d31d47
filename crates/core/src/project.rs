//! Project status state machine.
//!
//! A project only ever exists because an application was approved, and it is
//! created directly in `approved`. `start` moves it to `in_progress` and
//! freezes the team; `rollback` destroys it and is legal only from
//! `approved` so in-flight or finished work can never be destroyed.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, StatusParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Approved,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Approved => "approved",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ProjectStatus {
    type Error = StatusParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "approved" => Ok(ProjectStatus::Approved),
            "in_progress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            _ => Err(StatusParseError {
                kind: "project",
                value,
            }),
        }
    }
}

/// `start` is only legal from `approved`.
pub fn ensure_startable(status: ProjectStatus) -> Result<(), CoreError> {
    match status {
        ProjectStatus::Approved => Ok(()),
        other => Err(CoreError::Conflict(format!(
            "cannot start a project with status '{other}'"
        ))),
    }
}

/// `rollback` is only legal from `approved`; started or completed work is
/// never destroyed.
pub fn ensure_rollbackable(status: ProjectStatus) -> Result<(), CoreError> {
    match status {
        ProjectStatus::Approved => Ok(()),
        other => Err(CoreError::Conflict(format!(
            "cannot roll back a project with status '{other}'"
        ))),
    }
}

/// Team membership is frozen once the project leaves `approved`.
pub fn ensure_team_mutable(status: ProjectStatus) -> Result<(), CoreError> {
    match status {
        ProjectStatus::Approved => Ok(()),
        other => Err(CoreError::Conflict(format!(
            "team is frozen for a project with status '{other}'"
        ))),
    }
}
