use super::*;
use leptos::prelude::GetUntracked;

fn messages(toasts: &Toasts) -> Vec<String> {
    toasts.list().get_untracked().iter().map(|t| t.message.clone()).collect()
}

#[test]
fn pushes_stack_in_order() {
    let toasts = Toasts::new();
    toasts.success("one");
    toasts.error("two");
    toasts.info("three");
    assert_eq!(messages(&toasts), ["one", "two", "three"]);
}

#[test]
fn keyed_toast_replaces_instead_of_stacking() {
    let toasts = Toasts::new();
    toasts.error_keyed("session-expired", "expired");
    toasts.error_keyed("session-expired", "expired again");

    let list = toasts.list().get_untracked();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].message, "expired again");
    assert_eq!(list[0].kind, ToastKind::Error);
}

#[test]
fn keyed_and_unkeyed_do_not_collide() {
    let toasts = Toasts::new();
    toasts.error_keyed("session-expired", "expired");
    toasts.error("expired");
    assert_eq!(toasts.list().get_untracked().len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let toasts = Toasts::new();
    toasts.success("keep");
    toasts.success("drop");

    let id = toasts.list().get_untracked()[1].id;
    toasts.dismiss(id);
    assert_eq!(messages(&toasts), ["keep"]);
}
