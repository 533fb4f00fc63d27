//! Initials avatar for users and assignees.

use leptos::prelude::*;

/// Circle showing up to two initials derived from a display name.
#[component]
pub fn Avatar(name: String, #[prop(default = 40)] size: u32) -> impl IntoView {
    let initials = if name.trim().is_empty() {
        "?".to_owned()
    } else {
        name.split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    };

    let font_size = (f64::from(size) / 2.5).max(12.0);
    let style = format!("width:{size}px;height:{size}px;font-size:{font_size}px");

    view! {
        <div class="avatar" style=style>
            {initials}
        </div>
    }
}
