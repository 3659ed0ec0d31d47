//! Team composition validator.
//!
//! A project type defines per-role headcount constraints. Composition is
//! checked from the full member list: constrained roles that nobody fills
//! are reported explicitly, and `max_count = None` means unbounded.
//! `can_add_member` is the fast-path check run before each insertion so
//! over-filling is rejected early rather than only at start time.

use std::fmt;

use crate::types::DbId;

/// Per-role headcount constraint for a project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleConstraint {
    pub role_id: DbId,
    pub min_count: u32,
    /// `None` means unbounded.
    pub max_count: Option<u32>,
}

/// A single composition violation, reported per constrained role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Underfilled { role_id: DbId, count: u32, min: u32 },
    Overfilled { role_id: DbId, count: u32, max: u32 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Underfilled {
                role_id,
                count,
                min,
            } => write!(f, "role {role_id} has {count} member(s), minimum is {min}"),
            Violation::Overfilled {
                role_id,
                count,
                max,
            } => write!(f, "role {role_id} has {count} member(s), maximum is {max}"),
        }
    }
}

/// Number of members holding `role_id`.
fn count_for_role(member_roles: &[DbId], role_id: DbId) -> u32 {
    member_roles.iter().filter(|r| **r == role_id).count() as u32
}

/// Check every constrained role's headcount against its `[min, max]` range.
///
/// `member_roles` carries one entry per team member (the member's role id).
/// Returns an empty list exactly when the composition satisfies every
/// constraint.
pub fn validate_composition(
    member_roles: &[DbId],
    constraints: &[RoleConstraint],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for c in constraints {
        let count = count_for_role(member_roles, c.role_id);
        if count < c.min_count {
            violations.push(Violation::Underfilled {
                role_id: c.role_id,
                count,
                min: c.min_count,
            });
        } else if let Some(max) = c.max_count {
            if count > max {
                violations.push(Violation::Overfilled {
                    role_id: c.role_id,
                    count,
                    max,
                });
            }
        }
    }
    violations
}

/// A role is allowed for the project type only if a constraint entry exists
/// for it.
pub fn is_role_allowed(role_id: DbId, constraints: &[RoleConstraint]) -> bool {
    constraints.iter().any(|c| c.role_id == role_id)
}

/// Fast-path check run before inserting a member with `role_id`.
///
/// Returns `false` when the role is not allowed for the type or when adding
/// one more member would exceed the role's `max_count`.
pub fn can_add_member(member_roles: &[DbId], role_id: DbId, constraints: &[RoleConstraint]) -> bool {
    let Some(constraint) = constraints.iter().find(|c| c.role_id == role_id) else {
        return false;
    };
    match constraint.max_count {
        Some(max) => count_for_role(member_roles, role_id) < max,
        None => true,
    }
}

/// A project may start once the composition has zero violations.
pub fn can_start(member_roles: &[DbId], constraints: &[RoleConstraint]) -> bool {
    validate_composition(member_roles, constraints).is_empty()
}
