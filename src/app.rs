//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::StaticSegment;

use crate::components::layout::Layout;
use crate::components::toaster::Toaster;
use crate::net::http::{Api, ApiClient, GlooTransport};
use crate::net::session::Session;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, settings::SettingsPage, tasks::TasksPage,
};
use crate::state::auth::AuthState;
use crate::state::toast::Toasts;

/// Routes restricted to administrators.
const ADMIN_ONLY: &[&str] = &["Admin"];

/// Root application component.
///
/// Provides the session, auth state, toast queue, and API client via
/// context, kicks off the startup silent refresh, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    let auth = RwSignal::new(AuthState::default());
    let toasts = Toasts::new();
    let api: Api = ApiClient::new(GlooTransport, session, auth, toasts);

    provide_context(auth);
    provide_context(toasts);
    provide_context(api.clone());

    // Probe the refresh cookie once per process; `ready` flips when the
    // probe settles, whatever the outcome.
    #[cfg(feature = "csr")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            api.silent_refresh().await;
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = api;

    view! {
        <Title text="Task Manager"/>
        <Toaster/>

        <Router>
            <Routes fallback=|| {
                view! {
                    <Protected>
                        <Layout>
                            <DashboardPage/>
                        </Layout>
                    </Protected>
                }
            }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <Protected>
                                <Layout>
                                    <DashboardPage/>
                                </Layout>
                            </Protected>
                        }
                    }
                />
                <Route
                    path=StaticSegment("tasks")
                    view=|| {
                        view! {
                            <Protected>
                                <Layout>
                                    <TasksPage/>
                                </Layout>
                            </Protected>
                        }
                    }
                />
                <Route
                    path=StaticSegment("settings")
                    view=|| {
                        view! {
                            <Protected roles=ADMIN_ONLY>
                                <Layout>
                                    <SettingsPage/>
                                </Layout>
                            </Protected>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// Gate that waits for the startup probe, redirects anonymous visitors to
/// the login page, and optionally enforces a role restriction (an empty
/// slice means any authenticated user).
#[component]
fn Protected(
    #[prop(default = &[])] roles: &'static [&'static str],
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    // `Show`'s children closure is invoked repeatedly, so the `ChildrenFn`
    // must survive each call; a `StoredValue` is `Copy` and hands back a
    // fresh clone of the `Arc` on demand.
    let children = StoredValue::new(children);

    // Redirect to login once the probe has settled with no user.
    Effect::new(move || {
        let state = auth.get();
        if state.ready && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || auth.get().ready
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            {move || {
                let state = auth.get();
                if state.user.is_none() {
                    // Redirecting; render nothing in the meantime.
                    ().into_any()
                } else if !roles.is_empty() && !state.has_any_role(roles) {
                    view! {
                        <div class="access-denied">
                            "Access denied. You do not have permission to view this page."
                        </div>
                    }
                        .into_any()
                } else {
                    children.get_value()().into_any()
                }
            }}
        </Show>
    }
}
