//! Task list page with role-gated actions.
//!
//! Admins get create/edit/delete on every row; everyone else only sees an
//! "Update Status" action on tasks assigned to them.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::status_badge::StatusBadge;
use crate::components::task_form::TaskFormModal;
use crate::net::http::Api;
use crate::net::types::{Assignee, Task};
use crate::state::auth::AuthState;
use crate::state::toast::Toasts;

#[component]
pub fn TasksPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<Toasts>();
    let api = expect_context::<Api>();

    let tasks = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.fetch_tasks().await }
        }
    });

    let editing = RwSignal::new(None::<Task>);
    let show_form = RwSignal::new(false);
    let is_admin = move || auth.get().has_role("Admin");

    let on_add = move |_| {
        editing.set(None);
        show_form.set(true);
    };

    let on_edit = Callback::new(move |task: Task| {
        editing.set(Some(task));
        show_form.set(true);
    });

    let on_close = Callback::new(move |()| show_form.set(false));

    let on_delete = Callback::new({
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            let tasks = tasks.clone();
            leptos::task::spawn_local(async move {
                if api.delete_task(&id).await.is_ok() {
                    toasts.success("Task deleted");
                    tasks.refetch();
                }
            });
        }
    });

    view! {
        <div class="tasks-page">
            <header class="tasks-page__header">
                <h2 class="page-title">"Tasks"</h2>
                <Show when=is_admin>
                    <button class="btn btn--primary" on:click=on_add>
                        "+ Add Task"
                    </button>
                </Show>
            </header>

            <div class="task-table__wrap">
                <table class="task-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Description"</th>
                            <th>"Status"</th>
                            <th>"Assigned To"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <Suspense fallback=|| {
                            view! {
                                <tr>
                                    <td colspan="5" class="task-table__note">
                                        "Loading..."
                                    </td>
                                </tr>
                            }
                        }>
                            {move || {
                                tasks
                                    .get()
                                    .map(|result| match result {
                                        Ok(list) if list.is_empty() => {
                                            view! {
                                                <tr>
                                                    <td colspan="5" class="task-table__note">
                                                        "No tasks yet."
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
                                        }
                                        Ok(list) => {
                                            list.into_iter()
                                                .map(|task| {
                                                    view! {
                                                        <TaskRow task=task on_edit=on_edit on_delete=on_delete/>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                                .into_any()
                                        }
                                        Err(e) => {
                                            view! {
                                                <tr>
                                                    <td colspan="5" class="task-table__error">
                                                        {e.to_string()}
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
                                        }
                                    })
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>

            <Show when=move || show_form.get()>
                <TaskFormModal initial=editing on_close=on_close tasks=tasks.clone()/>
            </Show>
        </div>
    }
}

/// One row of the task table; the action cell depends on role and ownership.
#[component]
fn TaskRow(task: Task, on_edit: Callback<Task>, on_delete: Callback<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let is_admin = move || auth.get().has_role("Admin");

    let assignee_name =
        task.assigned_to.as_ref().and_then(Assignee::name).map(str::to_owned);
    let owned_task = task.clone();
    let owns = move || auth.get().is_owner(&owned_task);
    let admin_task = task.clone();
    let status_task = task.clone();
    let delete_id = task.id.clone();

    view! {
        <tr>
            <td class="task-table__title">{task.title.clone()}</td>
            <td class="task-table__description">{task.description.clone().unwrap_or_default()}</td>
            <td>
                <StatusBadge value=task.status/>
            </td>
            <td class="task-table__assignee">
                <Avatar name=assignee_name.clone().unwrap_or_default() size=36/>
                <span>{assignee_name.unwrap_or_else(|| "Unassigned".to_owned())}</span>
            </td>
            <td class="task-table__actions">
                <Show when=is_admin>
                    <button class="btn btn--small" on:click={
                        let task = admin_task.clone();
                        move |_| on_edit.run(task.clone())
                    }>
                        "Edit"
                    </button>
                    <button class="btn btn--small btn--danger" on:click={
                        let id = delete_id.clone();
                        move |_| on_delete.run(id.clone())
                    }>
                        "Delete"
                    </button>
                </Show>

                <Show when=move || !is_admin() && owns()>
                    <button class="btn btn--small btn--primary" on:click={
                        let task = status_task.clone();
                        move |_| on_edit.run(task.clone())
                    }>
                        "Update Status"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
