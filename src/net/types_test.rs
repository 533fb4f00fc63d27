use super::*;

fn user_json(role: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "_id": "u-1",
        "name": "Ada",
        "email": "ada@x.com",
        "role": role,
    })
}

// =============================================================
// Role normalization
// =============================================================

#[test]
fn role_from_bare_string_becomes_object_with_name() {
    let user: User = serde_json::from_value(user_json(serde_json::json!("Admin"))).unwrap();
    assert_eq!(user.role, Some(Role { name: "Admin".to_owned(), ..Role::default() }));
}

#[test]
fn role_from_full_object_keeps_fields() {
    let user: User = serde_json::from_value(user_json(serde_json::json!({
        "_id": "r-1",
        "name": "Developer",
        "description": "builds things",
    })))
    .unwrap();

    let role = user.role.unwrap();
    assert_eq!(role.id.as_deref(), Some("r-1"));
    assert_eq!(role.name, "Developer");
    assert_eq!(role.description.as_deref(), Some("builds things"));
}

#[test]
fn missing_role_stays_absent() {
    let user: User = serde_json::from_value(serde_json::json!({
        "_id": "u-2",
        "name": "Nia",
        "email": "nia@x.com",
    }))
    .unwrap();
    assert!(user.role.is_none());
}

// =============================================================
// User ids
// =============================================================

#[test]
fn user_id_accepts_both_id_and_underscore_id() {
    let a: User = serde_json::from_value(serde_json::json!({"_id": "u-1", "name": "A", "email": "a@x"})).unwrap();
    let b: User = serde_json::from_value(serde_json::json!({"id": "u-2", "name": "B", "email": "b@x"})).unwrap();
    assert_eq!(a.id, "u-1");
    assert_eq!(b.id, "u-2");
}

#[test]
fn numeric_user_id_normalizes_to_string() {
    let user: User = serde_json::from_value(serde_json::json!({"id": 7, "name": "N", "email": "n@x"})).unwrap();
    assert_eq!(user.id, "7");
}

// =============================================================
// Status
// =============================================================

#[test]
fn status_wire_names_round_trip() {
    for status in Status::ALL {
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json, serde_json::json!(status.label()));
        let back: Status = serde_json::from_value(json).unwrap();
        assert_eq!(back, status);
    }
}

#[test]
fn status_parse_falls_back_to_pending() {
    assert_eq!(Status::parse("In Progress"), Status::InProgress);
    assert_eq!(Status::parse("bogus"), Status::Pending);
}

// =============================================================
// Assignee union
// =============================================================

#[test]
fn assignee_from_bare_id() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "_id": "t-1",
        "title": "Ship it",
        "status": "Pending",
        "assignedTo": "u-9",
    }))
    .unwrap();

    let assignee = task.assigned_to.unwrap();
    assert_eq!(assignee.id(), "u-9");
    assert_eq!(assignee.name(), None);
}

#[test]
fn assignee_from_embedded_user() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "_id": "t-2",
        "title": "Review",
        "status": "In Progress",
        "assignedTo": {"_id": "u-3", "name": "Grace", "email": "g@x"},
    }))
    .unwrap();

    let assignee = task.assigned_to.unwrap();
    assert_eq!(assignee.id(), "u-3");
    assert_eq!(assignee.name(), Some("Grace"));
}

#[test]
fn assignee_null_and_missing_stay_absent() {
    let explicit: Task = serde_json::from_value(serde_json::json!({
        "_id": "t-3",
        "title": "A",
        "assignedTo": null,
    }))
    .unwrap();
    let missing: Task = serde_json::from_value(serde_json::json!({
        "_id": "t-4",
        "title": "B",
    }))
    .unwrap();
    assert!(explicit.assigned_to.is_none());
    assert!(missing.assigned_to.is_none());
    assert_eq!(missing.status, Status::Pending);
}

#[test]
fn numeric_assignee_id_normalizes_to_string() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "_id": "t-5",
        "title": "C",
        "assignedTo": 42,
    }))
    .unwrap();
    assert_eq!(task.assigned_to.unwrap().id(), "42");
}

// =============================================================
// Payloads and responses
// =============================================================

#[test]
fn task_payload_serializes_explicit_null_assignee() {
    let payload = TaskPayload {
        title: "T".to_owned(),
        description: String::new(),
        status: Status::Done,
        assigned_to: None,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"title": "T", "description": "", "status": "Done", "assignedTo": null})
    );
}

#[test]
fn status_payload_carries_only_status() {
    let json = serde_json::to_value(StatusPayload { status: Status::InProgress }).unwrap();
    assert_eq!(json, serde_json::json!({"status": "In Progress"}));
}

#[test]
fn user_payload_omits_password_when_absent() {
    let payload = UserPayload {
        name: "N".to_owned(),
        email: "n@x".to_owned(),
        role: "r-1".to_owned(),
        password: None,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({"name": "N", "email": "n@x", "role": "r-1"}));
}

#[test]
fn login_response_normalizes_embedded_user() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "access_token": "t1",
        "user": {"id": "1", "name": "Ada", "role": "Admin"},
    }))
    .unwrap();

    assert_eq!(resp.access_token, "t1");
    assert_eq!(resp.user.id, "1");
    assert_eq!(resp.user.role, Some(Role { name: "Admin".to_owned(), ..Role::default() }));
}
