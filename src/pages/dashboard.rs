//! Dashboard page with task statistics.

use leptos::prelude::*;

use crate::net::http::Api;
use crate::net::types::Status;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<Api>();

    let tasks = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.fetch_tasks().await }
        }
    });

    // Counts recompute whenever the task list lands or refetches.
    let count = move |status: Option<Status>| {
        let list = tasks.get().and_then(Result::ok).unwrap_or_default();
        match status {
            None => list.len(),
            Some(status) => list.iter().filter(|task| task.status == status).count(),
        }
    };

    view! {
        <div class="dashboard-page">
            <h2 class="page-title">"Dashboard"</h2>
            <div class="dashboard-page__grid">
                <StatCard label="Total Tasks" value=Signal::derive(move || count(None))/>
                <StatCard label="Pending" value=Signal::derive(move || count(Some(Status::Pending)))/>
                <StatCard
                    label="In Progress"
                    value=Signal::derive(move || count(Some(Status::InProgress)))
                />
                <StatCard label="Completed" value=Signal::derive(move || count(Some(Status::Done)))/>
            </div>
        </div>
    }
}

/// Single statistic tile.
#[component]
fn StatCard(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{move || value.get()}</div>
        </div>
    }
}
