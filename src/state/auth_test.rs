use super::*;
use crate::net::types::{Assignee, Role, Status};

fn user_with_role(id: &str, role: Option<&str>) -> User {
    User {
        id: id.to_owned(),
        name: "Ada".to_owned(),
        email: "ada@x.com".to_owned(),
        role: role.map(|name| Role { name: name.to_owned(), ..Role::default() }),
        ..User::default()
    }
}

fn state_with(user: Option<User>) -> AuthState {
    AuthState { user, ready: true }
}

fn task_assigned_to(assignee: Option<Assignee>) -> Task {
    Task {
        id: "t-1".to_owned(),
        title: "Ship".to_owned(),
        description: None,
        status: Status::Pending,
        created_by: None,
        assigned_to: assignee,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_not_ready() {
    let state = AuthState::default();
    assert!(!state.ready);
}

// =============================================================
// has_role / has_any_role
// =============================================================

#[test]
fn has_role_matches_exact_name() {
    let state = state_with(Some(user_with_role("u-1", Some("Admin"))));
    assert!(state.has_role("Admin"));
    assert!(!state.has_role("Developer"));
}

#[test]
fn has_any_role_is_membership() {
    let state = state_with(Some(user_with_role("u-1", Some("Manager"))));
    assert!(state.has_any_role(&["Admin", "Developer", "Manager", "User"]));
    assert!(!state.has_any_role(&["Admin", "Developer"]));
    assert!(!state.has_any_role(&[]));
}

#[test]
fn has_role_false_without_user() {
    let state = state_with(None);
    assert!(!state.has_role("Admin"));
    assert!(!state.has_any_role(&["Admin"]));
}

#[test]
fn has_role_false_without_role_name() {
    let no_role = state_with(Some(user_with_role("u-1", None)));
    let empty_name = state_with(Some(user_with_role("u-1", Some(""))));
    assert!(!no_role.has_role("Admin"));
    assert!(!empty_name.has_role("Admin"));
}

// =============================================================
// is_owner
// =============================================================

#[test]
fn is_owner_with_bare_id_assignee() {
    let state = state_with(Some(user_with_role("u-1", Some("User"))));
    let mine = task_assigned_to(Some(Assignee::Id("u-1".to_owned())));
    let theirs = task_assigned_to(Some(Assignee::Id("u-2".to_owned())));
    assert!(state.is_owner(&mine));
    assert!(!state.is_owner(&theirs));
}

#[test]
fn is_owner_with_embedded_assignee() {
    let state = state_with(Some(user_with_role("u-1", Some("User"))));
    let task = task_assigned_to(Some(Assignee::Embedded(user_with_role("u-1", None))));
    assert!(state.is_owner(&task));
}

#[test]
fn is_owner_false_without_user_or_assignee() {
    let anonymous = state_with(None);
    let state = state_with(Some(user_with_role("u-1", Some("User"))));
    let assigned = task_assigned_to(Some(Assignee::Id("u-1".to_owned())));
    let unassigned = task_assigned_to(None);

    assert!(!anonymous.is_owner(&assigned));
    assert!(!state.is_owner(&unassigned));
}

#[test]
fn is_owner_normalizes_numeric_ids_at_the_boundary() {
    // A numeric wire id deserializes to its string form, so the ownership
    // check is a plain string comparison.
    let task: Task = serde_json::from_value(serde_json::json!({
        "_id": "t-9",
        "title": "T",
        "assignedTo": 7,
    }))
    .unwrap();
    let state = state_with(Some(user_with_role("7", Some("User"))));
    assert!(state.is_owner(&task));
}

#[test]
fn predicates_reflect_user_changes_immediately() {
    let mut state = state_with(Some(user_with_role("u-1", Some("Admin"))));
    assert!(state.has_role("Admin"));

    state.user = Some(user_with_role("u-1", Some("User")));
    assert!(!state.has_role("Admin"));
    assert!(state.has_role("User"));
}
