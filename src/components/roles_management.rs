//! Role list and creation form for the admin settings area.

use leptos::prelude::*;

use crate::net::http::Api;
use crate::net::types::RolePayload;

#[component]
pub fn RolesManagement() -> impl IntoView {
    let api = expect_context::<Api>();

    let roles = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.fetch_roles().await }
        }
    });

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let role_name = name.get_untracked().trim().to_owned();
            if role_name.is_empty() || pending.get_untracked() {
                return;
            }
            pending.set(true);

            let payload = RolePayload {
                name: role_name,
                description: Some(description.get_untracked().trim().to_owned())
                    .filter(|d| !d.is_empty()),
            };
            let api = api.clone();
            let roles = roles.clone();
            leptos::task::spawn_local(async move {
                if api.create_role(&payload).await.is_ok() {
                    name.set(String::new());
                    description.set(String::new());
                    roles.refetch();
                }
                pending.set(false);
            });
        }
    };

    view! {
        <div class="settings-section">
            <h3 class="settings-section__title">"Roles Management"</h3>

            <form class="settings-form settings-form--row" on:submit=on_submit>
                <input
                    class="settings-form__input"
                    type="text"
                    placeholder="Role Name (e.g. Manager)"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="settings-form__input"
                    type="text"
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating..." } else { "Add Role" }}
                </button>
            </form>

            <Suspense fallback=|| view! { <div class="settings-note">"Loading roles..."</div> }>
                {move || {
                    roles
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|role| {
                                                let created = role
                                                    .created_at
                                                    .as_deref()
                                                    .and_then(|ts| ts.split('T').next())
                                                    .unwrap_or("-")
                                                    .to_owned();
                                                view! {
                                                    <div class="card">
                                                        <div class="card__title">{role.name}</div>
                                                        {role
                                                            .description
                                                            .map(|d| view! { <div class="card__subtitle">{d}</div> })}
                                                        <div class="card__footnote">{format!("Created: {created}")}</div>
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
