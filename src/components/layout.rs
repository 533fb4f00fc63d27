//! Application shell: sidebar navigation, current-user block, logout.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::avatar::Avatar;
use crate::net::http::Api;
use crate::state::auth::AuthState;

/// Every role that may browse the task list.
const TASK_ROLES: &[&str] = &["Admin", "Developer", "Manager", "User"];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<Api>();
    let pathname = use_location().pathname;

    let link_class = move |path: &'static str| {
        if pathname.get() == path {
            "nav-link nav-link--active"
        } else {
            "nav-link"
        }
    };

    let on_logout = move |_| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            api.logout().await;
        });
    };

    view! {
        <div class="layout">
            <aside class="layout__sidebar">
                <nav class="layout__nav">
                    <h1 class="layout__brand">"Task Manager"</h1>

                    <a class=move || link_class("/") href="/">
                        "Dashboard"
                    </a>

                    <Show when=move || auth.get().has_any_role(TASK_ROLES)>
                        <a class=move || link_class("/tasks") href="/tasks">
                            "Tasks"
                        </a>
                    </Show>

                    <Show when=move || auth.get().has_role("Admin")>
                        <a class=move || link_class("/settings") href="/settings">
                            "Settings"
                        </a>
                    </Show>
                </nav>

                <div class="layout__user">
                    {move || {
                        auth.get()
                            .user
                            .map_or_else(
                                || view! { <p class="layout__no-user">"Not logged in"</p> }.into_any(),
                                |user| {
                                    let role = user
                                        .role
                                        .as_ref()
                                        .map_or("N/A", |role| role.name.as_str())
                                        .to_owned();
                                    view! {
                                        <div class="layout__user-row">
                                            <Avatar name=user.name.clone() size=40/>
                                            <div class="layout__user-meta">
                                                <span class="layout__user-name">{user.name}</span>
                                                <span class="layout__user-email">{user.email}</span>
                                                <span class="layout__user-role">{format!("Role: {role}")}</span>
                                            </div>
                                        </div>
                                    }
                                        .into_any()
                                },
                            )
                    }}
                    <button class="btn layout__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </aside>

            <main class="layout__main">{children()}</main>
        </div>
    }
}
