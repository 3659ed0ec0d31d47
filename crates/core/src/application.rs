//! Application status state machine.
//!
//! `pending` is the only mutable state: edits and deletes are gated on it,
//! and both `approved` and `rejected` are reached exactly once. There is no
//! self-transition out of `approved`; a rollback is driven by the project's
//! destruction and is applied to the application by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, StatusParseError};
use crate::types::DbId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ApplicationStatus {
    type Error = StatusParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(StatusParseError {
                kind: "application",
                value,
            }),
        }
    }
}

/// Applications may only be edited while pending.
pub fn ensure_editable(status: ApplicationStatus) -> Result<(), CoreError> {
    match status {
        ApplicationStatus::Pending => Ok(()),
        other => Err(CoreError::Conflict(format!(
            "cannot edit an application with status '{other}'"
        ))),
    }
}

/// Deletion is restricted to the original author, and only while pending.
pub fn ensure_deletable(
    status: ApplicationStatus,
    author_id: DbId,
    requester_id: DbId,
) -> Result<(), CoreError> {
    if requester_id != author_id {
        return Err(CoreError::Forbidden(
            "only the author may delete an application".into(),
        ));
    }
    match status {
        ApplicationStatus::Pending => Ok(()),
        other => Err(CoreError::Conflict(format!(
            "cannot delete an application with status '{other}'"
        ))),
    }
}

/// Approval transitions pending -> approved exactly once. A repeat attempt
/// is a conflict and must be detected before any write happens.
pub fn ensure_approvable(status: ApplicationStatus) -> Result<(), CoreError> {
    match status {
        ApplicationStatus::Pending => Ok(()),
        other => Err(CoreError::Conflict(format!(
            "application is already '{other}'"
        ))),
    }
}

/// Rejection is terminal and only legal from pending.
pub fn ensure_rejectable(status: ApplicationStatus) -> Result<(), CoreError> {
    match status {
        ApplicationStatus::Pending => Ok(()),
        other => Err(CoreError::Conflict(format!(
            "cannot reject an application with status '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_editable() {
        assert!(ensure_editable(ApplicationStatus::Pending).is_ok());
    }

    #[test]
    fn approved_is_not_editable() {
        assert!(ensure_editable(ApplicationStatus::Approved).is_err());
        assert!(ensure_editable(ApplicationStatus::Rejected).is_err());
    }

    #[test]
    fn author_may_delete_pending() {
        assert!(ensure_deletable(ApplicationStatus::Pending, 7, 7).is_ok());
    }

    #[test]
    fn non_author_may_not_delete() {
        let err = ensure_deletable(ApplicationStatus::Pending, 7, 8).unwrap_err();
        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[test]
    fn approved_may_not_be_deleted_even_by_author() {
        let err = ensure_deletable(ApplicationStatus::Approved, 7, 7).unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[test]
    fn only_pending_is_approvable() {
        assert!(ensure_approvable(ApplicationStatus::Pending).is_ok());
        assert!(ensure_approvable(ApplicationStatus::Approved).is_err());
        assert!(ensure_approvable(ApplicationStatus::Rejected).is_err());
    }

    #[test]
    fn only_pending_is_rejectable() {
        assert!(ensure_rejectable(ApplicationStatus::Pending).is_ok());
        assert!(ensure_rejectable(ApplicationStatus::Rejected).is_err());
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(
                ApplicationStatus::try_from(status.as_str().to_string()).unwrap(),
                status
            );
        }
        assert!(ApplicationStatus::try_from("draft".to_string()).is_err());
    }
}
