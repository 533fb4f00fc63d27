//! Colored badge for a task's status.

use leptos::prelude::*;

use crate::net::types::Status;

#[component]
pub fn StatusBadge(value: Status) -> impl IntoView {
    let class = match value {
        Status::Done => "status-badge status-badge--done",
        Status::InProgress => "status-badge status-badge--in-progress",
        Status::Pending => "status-badge status-badge--pending",
    };

    view! { <span class=class>{value.label()}</span> }
}
