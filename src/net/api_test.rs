use futures::executor::block_on;
use leptos::prelude::{GetUntracked, Update};

use crate::net::http::{ApiError, Method};
use crate::net::testing::{harness, resp};
use crate::net::types::{Assignee, Role, RolePayload, Status, TaskPayload, User};
use crate::state::toast::ToastKind;

// =============================================================
// login
// =============================================================

#[test]
fn login_stores_token_and_normalized_user() {
    let (api, transport) = harness(|req| {
        assert_eq!(req.method, Method::Post);
        resp(200, r#"{"access_token":"t1","user":{"id":"1","name":"Ada","role":"Admin"}}"#)
    });

    let user = block_on(api.login("admin@x.com", "pw")).unwrap();

    assert_eq!(user.name, "Ada");
    assert_eq!(api.session().token().as_deref(), Some("t1"));

    let state = api.auth().get_untracked();
    let role = state.user.as_ref().and_then(|u| u.role.clone());
    assert_eq!(role, Some(Role { name: "Admin".to_owned(), ..Role::default() }));
    assert!(state.has_role("Admin"));

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].url, "/auth/login");
    assert!(calls[0].bearer.is_none());
    assert!(calls[0].body.as_deref().unwrap_or_default().contains("admin@x.com"));
}

#[test]
fn failed_login_leaves_prior_state_untouched() {
    let (api, _) = harness(|_| resp(401, r#"{"message":"Invalid credentials"}"#));

    let result = block_on(api.login("admin@x.com", "wrong"));

    assert_eq!(
        result,
        Err(ApiError::Status { status: 401, message: "Invalid credentials".to_owned() })
    );
    assert!(api.session().token().is_none());
    assert!(api.auth().get_untracked().user.is_none());
    // Surfaced exactly once, at the gateway; the form renders it inline.
    assert_eq!(api.toasts().list().get_untracked().len(), 1);
}

// =============================================================
// silent refresh
// =============================================================

#[test]
fn silent_refresh_populates_session_on_success() {
    let (api, _) = harness(|req| {
        if req.url.ends_with("/auth/refresh") {
            resp(200, r#"{"access_token":"t1"}"#)
        } else {
            assert_eq!(req.bearer.as_deref(), Some("t1"));
            resp(200, r#"{"_id":"u-1","name":"Ada","email":"ada@x.com","role":"Admin"}"#)
        }
    });

    block_on(api.silent_refresh());

    let state = api.auth().get_untracked();
    assert!(state.ready);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-1"));
    assert!(state.has_role("Admin"));
    assert_eq!(api.session().token().as_deref(), Some("t1"));
    assert!(api.toasts().list().get_untracked().is_empty());
}

#[test]
fn failed_silent_refresh_sets_ready_without_user_or_toast() {
    let (api, _) = harness(|_| resp(401, ""));

    block_on(api.silent_refresh());

    let state = api.auth().get_untracked();
    assert!(state.ready);
    assert!(state.user.is_none());
    assert!(api.session().token().is_none());
    // Startup probing is an expected failure: logged, never toasted.
    assert!(api.toasts().list().get_untracked().is_empty());
}

#[test]
fn silent_refresh_clears_session_when_profile_fetch_fails() {
    let (api, _) = harness(|req| {
        if req.url.ends_with("/auth/refresh") {
            resp(200, r#"{"access_token":"t1"}"#)
        } else {
            resp(500, "boom")
        }
    });

    block_on(api.silent_refresh());

    let state = api.auth().get_untracked();
    assert!(state.ready);
    assert!(state.user.is_none());
    assert!(api.session().token().is_none());
    assert!(api.toasts().list().get_untracked().is_empty());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_session_and_notifies() {
    let (api, transport) = harness(|_| resp(200, ""));
    api.session().set_token(Some("t1".to_owned()));
    api.auth().update(|auth| {
        auth.user = Some(User { id: "u-1".to_owned(), ..User::default() });
        auth.ready = true;
    });

    block_on(api.logout());

    assert!(api.session().token().is_none());
    assert!(api.auth().get_untracked().user.is_none());
    assert_eq!(transport.count("/auth/logout"), 1);

    let toasts = api.toasts().list().get_untracked();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Signed out");
    assert_eq!(toasts[0].kind, ToastKind::Success);
}

// =============================================================
// typed endpoints
// =============================================================

#[test]
fn fetch_tasks_decodes_list() {
    let (api, _) = harness(|_| {
        resp(
            200,
            r#"[{"_id":"t-1","title":"Ship","status":"In Progress","assignedTo":"u-1"}]"#,
        )
    });

    let tasks = block_on(api.fetch_tasks()).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].status, Status::InProgress);
    assert_eq!(tasks[0].assigned_to.as_ref().map(Assignee::id), Some("u-1"));
}

#[test]
fn create_task_posts_full_payload() {
    let (api, transport) = harness(|_| {
        resp(200, r#"{"_id":"t-9","title":"New","status":"Pending"}"#)
    });

    let payload = TaskPayload {
        title: "New".to_owned(),
        description: String::new(),
        status: Status::Pending,
        assigned_to: Some("u-2".to_owned()),
    };
    let task = block_on(api.create_task(&payload)).unwrap();

    assert_eq!(task.id, "t-9");
    let body = transport.calls()[0].body.clone().unwrap_or_default();
    assert!(body.contains(r#""assignedTo":"u-2""#));
}

#[test]
fn update_task_status_sends_only_status() {
    let (api, transport) = harness(|_| {
        resp(200, r#"{"_id":"t-1","title":"Ship","status":"Done"}"#)
    });

    block_on(api.update_task_status("t-1", Status::Done)).unwrap();

    let call = &transport.calls()[0];
    assert_eq!(call.method, Method::Patch);
    assert_eq!(call.url, "/tasks/t-1");
    assert_eq!(call.body.as_deref(), Some(r#"{"status":"Done"}"#));
}

#[test]
fn delete_task_tolerates_empty_response() {
    let (api, transport) = harness(|_| resp(204, ""));
    block_on(api.delete_task("t-1")).unwrap();
    assert_eq!(transport.calls()[0].url, "/tasks/t-1");
    assert_eq!(transport.calls()[0].method, Method::Delete);
}

#[test]
fn create_role_posts_payload() {
    let (api, transport) = harness(|_| resp(200, r#"{"_id":"r-1","name":"Manager"}"#));

    let payload = RolePayload { name: "Manager".to_owned(), description: None };
    let role = block_on(api.create_role(&payload)).unwrap();

    assert_eq!(role.name, "Manager");
    let body = transport.calls()[0].body.clone().unwrap_or_default();
    assert_eq!(body, r#"{"name":"Manager"}"#);
}
