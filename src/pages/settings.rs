//! Admin settings page: roles and users management tabs.

use leptos::prelude::*;

use crate::components::roles_management::RolesManagement;
use crate::components::user_management::UserManagement;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SettingsTab {
    #[default]
    Roles,
    Users,
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let active = RwSignal::new(SettingsTab::default());

    let tab_class = move |tab: SettingsTab| {
        if active.get() == tab {
            "settings-tab settings-tab--active"
        } else {
            "settings-tab"
        }
    };

    view! {
        <div class="settings-page">
            <h2 class="page-title">"Settings"</h2>

            <div class="settings-tabs">
                <button
                    class=move || tab_class(SettingsTab::Roles)
                    on:click=move |_| active.set(SettingsTab::Roles)
                >
                    "Roles Management"
                </button>
                <button
                    class=move || tab_class(SettingsTab::Users)
                    on:click=move |_| active.set(SettingsTab::Users)
                >
                    "Users Management"
                </button>
            </div>

            <div class="settings-content">
                <Show when=move || active.get() == SettingsTab::Roles>
                    <RolesManagement/>
                </Show>
                <Show when=move || active.get() == SettingsTab::Users>
                    <UserManagement/>
                </Show>
            </div>
        </div>
    }
}
