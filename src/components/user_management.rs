//! User account management for the admin settings area.
//!
//! One form serves create and edit: editing pre-fills it and drops the
//! password field (passwords are only set at account creation).

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::net::http::Api;
use crate::net::types::{User, UserPayload};

#[component]
pub fn UserManagement() -> impl IntoView {
    let api = expect_context::<Api>();

    let users = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.fetch_users().await }
        }
    });
    let roles = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.fetch_roles().await }
        }
    });

    let editing = RwSignal::new(None::<User>);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role_id = RwSignal::new(String::new());

    let reset_form = move || {
        editing.set(None);
        name.set(String::new());
        email.set(String::new());
        password.set(String::new());
        role_id.set(String::new());
    };

    let on_edit = Callback::new(move |user: User| {
        name.set(user.name.clone());
        email.set(user.email.clone());
        password.set(String::new());
        role_id.set(user.role.as_ref().and_then(|r| r.id.clone()).unwrap_or_default());
        editing.set(Some(user));
    });

    let on_delete = Callback::new({
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            let users = users.clone();
            leptos::task::spawn_local(async move {
                if api.delete_user(&id).await.is_ok() {
                    users.refetch();
                }
            });
        }
    });

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let target = editing.get_untracked();
            let payload = UserPayload {
                name: name.get_untracked().trim().to_owned(),
                email: email.get_untracked().trim().to_owned(),
                role: role_id.get_untracked(),
                password: if target.is_none() {
                    Some(password.get_untracked()).filter(|p| !p.is_empty())
                } else {
                    None
                },
            };

            let api = api.clone();
            let users = users.clone();
            leptos::task::spawn_local(async move {
                let result = match &target {
                    Some(user) => api.update_user(&user.id, &payload).await,
                    None => api.create_user(&payload).await,
                };
                if result.is_ok() {
                    reset_form();
                    users.refetch();
                }
            });
        }
    };

    view! {
        <div class="settings-section">
            <h3 class="settings-section__title">"User Management"</h3>

            <form class="settings-form" on:submit=on_submit>
                <div class="settings-form__grid">
                    <input
                        class="settings-form__input"
                        type="text"
                        placeholder="Full Name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="settings-form__input"
                        type="email"
                        placeholder="Email Address"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />

                    <Show when=move || editing.get().is_none()>
                        <input
                            class="settings-form__input"
                            type="password"
                            placeholder="Password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </Show>

                    <select
                        class="settings-form__input"
                        required
                        prop:value=move || role_id.get()
                        on:change=move |ev| role_id.set(event_target_value(&ev))
                    >
                        {move || match roles.get() {
                            None => view! { <option value="">"Loading roles..."</option> }.into_any(),
                            Some(Err(_)) => {
                                view! {
                                    <option value="">"Select Role"</option>
                                    <option value="" disabled>
                                        "Failed to load roles"
                                    </option>
                                }
                                    .into_any()
                            }
                            Some(Ok(list)) => {
                                view! {
                                    <option value="">"Select Role"</option>
                                    {list
                                        .into_iter()
                                        .filter_map(|role| {
                                            let id = role.id?;
                                            let selected = role_id.get_untracked() == id;
                                            Some(
                                                view! {
                                                    <option value=id selected=selected>
                                                        {role.name}
                                                    </option>
                                                },
                                            )
                                        })
                                        .collect::<Vec<_>>()}
                                }
                                    .into_any()
                            }
                        }}
                    </select>
                </div>

                <button type="submit" class="btn btn--primary settings-form__submit">
                    {move || if editing.get().is_some() { "Update User" } else { "Create User" }}
                </button>
            </form>

            <Suspense fallback=|| view! { <div class="settings-note">"Loading users..."</div> }>
                {move || {
                    users
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|user| {
                                                let edit_user = user.clone();
                                                let delete_id = user.id.clone();
                                                let role_name = user
                                                    .role
                                                    .as_ref()
                                                    .map_or("-", |r| r.name.as_str())
                                                    .to_owned();
                                                view! {
                                                    <div class="card card--row">
                                                        <div class="card__identity">
                                                            <Avatar name=user.name.clone() size=40/>
                                                            <div>
                                                                <div class="card__title">{user.name.clone()}</div>
                                                                <div class="card__subtitle">{user.email.clone()}</div>
                                                                <div class="card__footnote">{role_name}</div>
                                                            </div>
                                                        </div>
                                                        <div class="card__actions">
                                                            <button
                                                                class="link-button"
                                                                on:click=move |_| on_edit.run(edit_user.clone())
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="link-button link-button--danger"
                                                                on:click=move |_| on_delete.run(delete_id.clone())
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <div class="settings-error">{e.to_string()}</div> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
