//! Create/edit task modal with role-restricted fields.
//!
//! Admins edit every field and assign the task; a non-admin owner only gets
//! the status select, and only a status-only payload crosses the wire for
//! them.

use leptos::prelude::*;

use crate::net::http::{Api, ApiError};
use crate::net::types::{Status, Task, TaskPayload};
use crate::state::auth::AuthState;
use crate::state::toast::Toasts;

#[component]
pub fn TaskFormModal(
    /// Task being edited, `None` for create.
    initial: RwSignal<Option<Task>>,
    on_close: Callback<()>,
    tasks: LocalResource<Result<Vec<Task>, ApiError>>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<Toasts>();
    let api = expect_context::<Api>();

    let editing = initial.get_untracked();
    let is_edit = editing.is_some();
    let owner = editing.as_ref().is_some_and(|task| auth.get_untracked().is_owner(task));
    let is_admin = move || auth.get().has_role("Admin");

    let title = RwSignal::new(editing.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let description =
        RwSignal::new(editing.as_ref().and_then(|t| t.description.clone()).unwrap_or_default());
    let status = RwSignal::new(editing.as_ref().map(|t| t.status).unwrap_or_default());
    let assigned_to = RwSignal::new(
        editing
            .as_ref()
            .and_then(|t| t.assigned_to.as_ref())
            .map(|a| a.id().to_owned())
            .unwrap_or_default(),
    );
    let task_id = editing.map(|t| t.id);

    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Admins need the user list for the assignee select; everyone else
    // skips the fetch entirely.
    let users = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let admin = auth.get().has_role("Admin");
            async move {
                if admin {
                    api.fetch_users().await.unwrap_or_default()
                } else {
                    Vec::new()
                }
            }
        }
    });

    let submit = Callback::new({
        let api = api.clone();
        move |()| {
            if busy.get_untracked() {
                return;
            }
            let admin = auth.get_untracked().has_role("Admin");
            let trimmed_title = title.get_untracked().trim().to_owned();
            if trimmed_title.is_empty() && !is_edit {
                error.set(Some("Title is required".to_owned()));
                return;
            }
            busy.set(true);
            error.set(None);

            let payload = TaskPayload {
                title: trimmed_title,
                description: description.get_untracked().trim().to_owned(),
                status: status.get_untracked(),
                assigned_to: Some(assigned_to.get_untracked()).filter(|id| !id.is_empty()),
            };
            let status_only = status.get_untracked();

            let api = api.clone();
            let task_id = task_id.clone();
            let tasks = tasks.clone();
            leptos::task::spawn_local(async move {
                let result = match &task_id {
                    Some(id) if admin => api.update_task(id, &payload).await.map(|_| "Task updated"),
                    Some(id) => api.update_task_status(id, status_only).await.map(|_| "Task updated"),
                    None => api.create_task(&payload).await.map(|_| "Task created"),
                };
                match result {
                    Ok(message) => {
                        toasts.success(message);
                        tasks.refetch();
                        on_close.run(());
                    }
                    // Already toasted by the gateway; mirror it inline.
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h3>{if is_edit { "Edit Task" } else { "Create Task" }}</h3>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>

                <form
                    class="dialog__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    {move || {
                        error
                            .get()
                            .map(|message| view! { <div class="form-error">{message}</div> })
                    }}

                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || title.get()
                            disabled=move || !is_admin()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input dialog__textarea"
                            prop:value=move || description.get()
                            disabled=move || !is_admin()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Status"
                            <select
                                class="dialog__input"
                                disabled=move || !is_admin() && !owner
                                prop:value=move || status.get().label()
                                on:change=move |ev| status.set(Status::parse(&event_target_value(&ev)))
                            >
                                {Status::ALL
                                    .into_iter()
                                    .map(|option| {
                                        let selected = status.get_untracked() == option;
                                        view! {
                                            <option value=option.label() selected=selected>
                                                {option.label()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>

                        <Show when=is_admin>
                            <label class="dialog__label dialog__label--wide">
                                "Assign To"
                                <select
                                    class="dialog__input"
                                    prop:value=move || assigned_to.get()
                                    on:change=move |ev| assigned_to.set(event_target_value(&ev))
                                >
                                    <option value="">"Unassigned"</option>
                                    {move || {
                                        users
                                            .get()
                                            .unwrap_or_default()
                                            .into_iter()
                                            .map(|user| {
                                                let selected = assigned_to.get_untracked() == user.id;
                                                view! {
                                                    <option value=user.id selected=selected>
                                                        {user.name}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </select>
                            </label>
                        </Show>
                    </div>

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || {
                                if busy.get() {
                                    "Saving..."
                                } else if is_edit {
                                    "Save Changes"
                                } else {
                                    "Create Task"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
