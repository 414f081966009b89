//! Light/dark theme switch in the navbar.

use leptos::prelude::*;

use crate::state::theme::ThemePreference;
use crate::util::theme_storage;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let preference = expect_context::<RwSignal<ThemePreference>>();

    let on_click = move |_| {
        preference.update(|pref| {
            let next = theme_storage::toggle(pref);
            leptos::logging::log!("theme switched to {next}");
        });
    };

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            title=move || preference.with(|p| p.theme.toggle_label())
            aria-label=move || preference.with(|p| p.theme.toggle_label())
            on:click=on_click
        >
            <span class="theme-icon">{move || preference.with(|p| p.theme.icon())}</span>
        </button>
    }
}
