//! Authentication state and the authorization predicates derived from it.
//!
//! The predicates are pure functions of the current state: nothing here is
//! cached, so a role change takes effect on the very next render that
//! consults them.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Task, User};

/// Authentication state tracking the current user and startup readiness.
///
/// `ready` flips to `true` exactly once, after the initial silent-refresh
/// attempt settles, so callers can tell "still loading" from "logged out".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub ready: bool,
}

impl AuthState {
    /// Whether the current user holds exactly this role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.role_name().is_some_and(|name| name == role)
    }

    /// Whether the current user holds any of the given roles.
    #[must_use]
    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        self.role_name().is_some_and(|name| roles.contains(&name))
    }

    /// Whether the current user is the task's assignee.
    ///
    /// Owners may update a task's status but not its other fields.
    #[must_use]
    pub fn is_owner(&self, task: &Task) -> bool {
        let Some(user) = &self.user else {
            return false;
        };
        if user.id.is_empty() {
            return false;
        }
        task.assigned_to
            .as_ref()
            .is_some_and(|assignee| !assignee.id().is_empty() && assignee.id() == user.id)
    }

    fn role_name(&self) -> Option<&str> {
        self.user
            .as_ref()?
            .role
            .as_ref()
            .map(|role| role.name.as_str())
            .filter(|name| !name.is_empty())
    }
}
