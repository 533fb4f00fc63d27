//! Renders the toast queue in the top-right corner.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, Toasts};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .list()
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                            ToastKind::Info => "toast toast--info",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message}</span>
                                <button class="toast__close" on:click=move |_| toasts.dismiss(id)>
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
