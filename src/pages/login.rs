//! Login page with inline error reporting.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::Api;
use crate::state::auth::AuthState;
use crate::state::toast::Toasts;

/// Email/password form. A rejected login renders inline (the gateway toast
/// already fired); a successful one greets the user and navigates home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<Toasts>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    // Demo credentials pre-filled.
    let email = RwSignal::new("admin@task-app.com".to_owned());
    let password = RwSignal::new("Secure".to_owned());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Navigate once the user lands in state, whether from this form or
    // from the startup silent refresh.
    Effect::new(move || {
        if let Some(user) = auth.get().user {
            toasts.success(format!("Welcome back, {}", user.name).trim());
            navigate("/", NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = api.login(&email.get_untracked(), &password.get_untracked()).await {
                error.set(Some(e.to_string()));
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h2 class="login-form__title">"Sign in"</h2>

                {move || {
                    error.get().map(|message| view! { <div class="form-error">{message}</div> })
                }}

                <label class="login-form__label">
                    "Email"
                    <input
                        class="login-form__input"
                        type="text"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="login-form__label">
                    "Password"
                    <input
                        class="login-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <button type="submit" class="btn btn--primary login-form__submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
